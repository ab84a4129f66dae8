use std::time::Instant;
use log::{info, warn};

use thermocouple::prelude::*;

fn main() {
    env_logger::init();

    let time = Instant::now();

    // Terminal block at 23.5°C, a few raw voltages per type.
    let cold_junction = 23.5;
    let readings = [-5.0, 0.0, 1.25, 4.096, 12.5, 40.0, 75.0];

    for kind in ThermocoupleType::ALL {
        let thermocouple = Thermocouple(kind);
        let domain = thermocouple.millivolt_domain();
        info!(
            "Type {} ({}), calibrated {}mV to {}mV",
            kind,
            kind.profile().alloys,
            domain.low,
            domain.high
        );

        for millivolts in readings {
            let reading = Reading {
                thermocouple: kind,
                millivolts,
                cold_junction,
            };

            match reading.convert() {
                Conversion::Temperature(celsius) => {
                    info!("  {:>7.3}mV -> {:>9.3}°C", millivolts, celsius)
                }
                Conversion::OutOfRange => warn!("  {:>7.3}mV is out of range", millivolts),
            }
        }
    }

    info!("Converted in {}us", time.elapsed().as_micros());
}
