#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use log::{error, info, warn};

use gauge_core::config::{LOOP_PERIOD_MS, STARTUP_SETTLE_MS};
use gauge_core::{BootError, Console, Converter, Gauge, Presenter, Sampler, bring_up};
use gauge_firmware::adc::DividerInput;
use gauge_firmware::hardware;

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    rtt_target::rprintln!("PANIC: {}", info);
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

/// Terminal state after a failed display bring-up. Nothing is retried.
async fn halt(err: BootError) -> ! {
    error!("Halted: {}", err);
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    rtt_target::rtt_init_log!();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    esp_alloc::heap_allocator!(#[esp_hal::ram(reclaimed)] size: 65536);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // The gauge runs entirely in the main task
    let _ = spawner;

    let uart = hardware::create_console(peripherals.UART0, peripherals.GPIO43)
        .expect("Failed to configure console UART");
    let mut console = Console::new(uart);

    // Give a host terminal time to attach before the first line
    Timer::after(Duration::from_millis(STARTUP_SETTLE_MS)).await;
    console.starting();
    info!("Console ready");

    let input = DividerInput::new(peripherals.ADC1, peripherals.GPIO2);

    let booted = bring_up(
        &mut console,
        || hardware::init_primary_panel(peripherals.I2C0, peripherals.GPIO5, peripherals.GPIO6),
        || hardware::init_secondary_panel(peripherals.I2C1, peripherals.GPIO4, peripherals.GPIO3),
    );
    let (primary, secondary) = match booted {
        Ok(panels) => panels,
        Err(e) => halt(e).await,
    };

    let mut gauge = Gauge::new(
        Sampler::new(input, embassy_time::Delay),
        Converter::default(),
        Presenter::new(primary, secondary),
        console,
    );

    info!("Gauge running");

    loop {
        if let Err(e) = gauge.cycle() {
            warn!("Render failed: {}", e);
        }
        Timer::after(Duration::from_millis(LOOP_PERIOD_MS)).await;
    }
}
