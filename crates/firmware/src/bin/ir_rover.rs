//! IR remote-controlled rover
//!
//! ## Pin Map (Pico 2 W)
//!
//! | GPIO | Function                          |
//! |------|-----------------------------------|
//! | 10   | left motor 1A (forward)           |
//! | 11   | left motor 2A (reverse)           |
//! | 12   | right motor 1A (forward)          |
//! | 13   | right motor 2A (reverse)          |
//! | 14   | emergency-stop input (rising)     |
//! | 15   | IR receiver output                |
//! | 16   | lights (active low)               |
//! | 18   | left motor EN (PWM slice 1 A)     |
//! | 19   | right motor EN (PWM slice 1 B)    |
//! | 20   | green indicator LED               |
//! | 21   | red indicator LED                 |

#![no_std]
#![no_main]

const BUILD_ID: &str = env!("BUILD_ID");

use cortex_m_rt::entry;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::pwm::Pwm;
use embassy_rp::Peripheral;
use ir_rover_core::motor::{AccessoryOutput, DriveTrain, HBridgeChannel, IndicatorLeds};
use ir_rover_core::vehicle::VehicleOutputs;
use ir_rover_firmware::core::traits::EmbassyState;
use ir_rover_firmware::libraries::{OutputPin, PwmChannel, IR_LINK};
use ir_rover_firmware::parameters::BoardParams;
use ir_rover_firmware::platform::rp2350::{
    embassy_pwm_config, tasks, Rp2350Output, Rp2350Pwm, SharedOutputs,
};
use ir_rover_firmware::platform::traits::pwm::PwmConfig;
use ir_rover_firmware::rover::RoverControl;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

static EXECUTOR_ESTOP: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_IR: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_CONTROL: StaticCell<Executor> = StaticCell::new();
static OUTPUTS: StaticCell<SharedOutputs> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_2() {
    EXECUTOR_ESTOP.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_IR.on_interrupt()
}

fn output(pin: impl Peripheral<P = impl Pin> + 'static, level: Level) -> OutputPin<Rp2350Output> {
    OutputPin::new(Rp2350Output::new(Output::new(pin, level)))
}

fn halt(reason: &str) -> ! {
    ir_rover_firmware::log_error!("Startup failed: {}", reason);
    loop {
        cortex_m::asm::wfi();
    }
}

#[entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());

    ir_rover_firmware::log_info!("IR rover [BUILD_ID: {}]", BUILD_ID);
    let params = BoardParams::from_build_env();
    IR_LINK.configure(&params.ir);
    ir_rover_firmware::log_info!(
        "IR: one > {} us, timeout {} us; drive: step {}, max {}, settle {} ms",
        params.ir.logical_one_threshold,
        params.ir.frame_timeout,
        params.drive.speed_step,
        params.drive.speed_max,
        params.drive.settle_ms
    );

    let pwm = Pwm::new_output_ab(
        p.PWM_SLICE1,
        p.PIN_18,
        p.PIN_19,
        embassy_pwm_config(&PwmConfig::default()),
    );
    let Ok((left_en, right_en)) = Rp2350Pwm::split(pwm) else {
        halt("PWM slice 1 split");
    };

    let drive = DriveTrain::new(
        HBridgeChannel::new(
            output(p.PIN_10, Level::Low),
            output(p.PIN_11, Level::Low),
            PwmChannel::new(left_en),
        ),
        HBridgeChannel::new(
            output(p.PIN_12, Level::Low),
            output(p.PIN_13, Level::Low),
            PwmChannel::new(right_en),
        ),
    );
    let lights = AccessoryOutput::new(
        output(p.PIN_16, Level::High),
        params.drive.accessory_active_low,
    );
    let indicator = IndicatorLeds::new(
        output(p.PIN_20, Level::High),
        output(p.PIN_21, Level::Low),
    );

    let mut vehicle_outputs = VehicleOutputs::new(drive, lights, indicator);
    if let Err(e) = vehicle_outputs.initialize() {
        halt(e.description());
    }
    let outputs: &'static SharedOutputs = OUTPUTS.init(EmbassyState::new(vehicle_outputs));

    let ir_input = Input::new(p.PIN_15, Pull::Up);
    let estop_input = Input::new(p.PIN_14, Pull::Down);

    // Cortex-M: lower number = higher priority
    interrupt::SWI_IRQ_2.set_priority(Priority::P1);
    let spawner = EXECUTOR_ESTOP.start(interrupt::SWI_IRQ_2);
    spawner.must_spawn(tasks::emergency_stop_task(estop_input, outputs));

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_IR.start(interrupt::SWI_IRQ_1);
    spawner.must_spawn(tasks::edge_capture_task(ir_input));
    spawner.must_spawn(tasks::frame_watchdog_task(params.ir.watchdog_poll_us));

    let control = RoverControl::new(&params);
    let executor = EXECUTOR_CONTROL.init(Executor::new());
    executor.run(|spawner| {
        spawner.must_spawn(tasks::control_loop_task(control, outputs));
    })
}
