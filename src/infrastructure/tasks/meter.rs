use embassy_time::{Instant, Ticker};

use crate::config;
use crate::controllers::CommandReceiver;
use crate::infrastructure::types::LightMeterUsecasesImpl;

/// Fixed-period metering loop
///
/// Pending console commands are applied before each cycle so a manual alert
/// is visible in the same cycle it arrives.
#[embassy_executor::task]
pub async fn meter_task(mut meter: LightMeterUsecasesImpl, commands: CommandReceiver) {
    let mut ticker = Ticker::every(config::METER.cycle_period());
    log::info!(
        "meter: running every {} ms",
        config::METER.cycle_period().as_millis()
    );

    loop {
        while let Ok(command) = commands.try_receive() {
            meter.handle_command(command, Instant::now());
        }

        let snapshot = meter.cycle(Instant::now()).await;
        log::debug!(
            "meter: adc={} lux={} rgb=({},{},{}) alert={}",
            snapshot.sample.get(),
            snapshot.lux,
            snapshot.color.r,
            snapshot.color.g,
            snapshot.color.b,
            snapshot.alert
        );

        ticker.next().await;
    }
}
