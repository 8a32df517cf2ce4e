use embedded_hal_async::delay::DelayNs;
use lux_estimator::{AnalogSource, CalibrationModel, RoomAnchor, Sampler, fit};

use crate::config::CalibrationSettings;

/// Run the startup calibration handshake
///
/// The operator holds the sensor at the dim reference, then at the bright
/// one; each sample is preceded by the configured pre-sample delay.
pub async fn run_calibration<S: AnalogSource, D: DelayNs>(
    sampler: &mut Sampler<S, D>,
    settings: &CalibrationSettings,
) -> CalibrationModel {
    log::info!(
        "calibration: hold sensor at dim reference (~{} lux)",
        settings.dim_reference_lux
    );
    sampler.pause(settings.pre_sample_delay).await;
    let dim = sampler.sample(settings.profile).await;

    log::info!(
        "calibration: dim adc={}, hold sensor at bright reference (~{} lux)",
        dim.get(),
        settings.bright_reference_lux
    );
    sampler.pause(settings.pre_sample_delay).await;
    let bright = sampler.sample(settings.profile).await;
    log::info!("calibration: bright adc={}", bright.get());

    let mut model = fit(
        dim.get(),
        settings.dim_reference_lux,
        bright.get(),
        settings.bright_reference_lux,
    );
    if model.is_fallback() {
        log::warn!(
            "calibration: reference readings too close, falling back to p={}",
            model.exponent()
        );
    }

    if let RoomAnchor::Target(target) = settings.room_anchor {
        log::info!("calibration: hold sensor in room (~{} lux)", target);
        sampler.pause(settings.pre_sample_delay).await;
        let room = sampler.sample(settings.profile).await;
        model = model.anchored(settings.room_anchor, room.get());
    }

    log::info!(
        "calibration: C={} p={} K={}",
        model.coefficient(),
        model.exponent(),
        model.room_scale()
    );

    model
}
