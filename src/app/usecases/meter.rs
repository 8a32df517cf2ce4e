use embassy_time::Instant;
use embedded_hal_async::delay::DelayNs;
use lux_estimator::{
    AlertPolicy, AnalogSource, CalibrationModel, Command, Sampler, indicate, to_illuminance,
};

use super::calibration::run_calibration;
use crate::config::{CalibrationSettings, MeterSettings};
use crate::domain::entity::MeterSnapshot;
use crate::domain::ports::PanelPort;

pub struct LightMeterUsecases<S: AnalogSource, D: DelayNs, P: PanelPort> {
    sampler: Sampler<S, D>,
    panel: P,
    model: CalibrationModel,
    settings: MeterSettings,
    alert: AlertPolicy,
}

impl<S: AnalogSource, D: DelayNs, P: PanelPort> LightMeterUsecases<S, D, P> {
    pub fn new(
        sampler: Sampler<S, D>,
        panel: P,
        model: CalibrationModel,
        settings: &MeterSettings,
    ) -> Self {
        Self {
            sampler,
            panel,
            model,
            settings: *settings,
            alert: AlertPolicy::new(settings.alert_threshold_lux, settings.manual_alert_duration),
        }
    }

    /// Calibrate against the reference positions and build the meter around
    /// the resulting model
    pub async fn calibrate(
        mut sampler: Sampler<S, D>,
        panel: P,
        calibration: &CalibrationSettings,
        settings: &MeterSettings,
    ) -> Self {
        let model = run_calibration(&mut sampler, calibration).await;
        Self::new(sampler, panel, model, settings)
    }

    pub fn handle_command(&mut self, command: Command, now: Instant) {
        match command {
            Command::BuzzerTest => {
                log::info!(
                    "meter: manual alert for {} ms",
                    self.settings.manual_alert_duration.as_millis()
                );
                self.alert.trigger_manual(now);
            }
        }
    }

    /// Sample, convert and drive every output once
    pub async fn cycle(&mut self, now: Instant) -> MeterSnapshot {
        let sample = self.sampler.sample(self.settings.profile).await;
        let lux = to_illuminance(&self.model, sample);

        let indication = indicate(lux, &self.settings.indicator, &mut self.alert, now);
        self.panel.report_illuminance(indication.reported_lux);
        self.panel.set_indicator(indication.color);
        self.panel.set_alert(indication.alert);

        MeterSnapshot {
            sample,
            lux,
            reported_lux: indication.reported_lux,
            color: indication.color,
            alert: indication.alert,
        }
    }
}
