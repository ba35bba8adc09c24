use std::net::TcpListener;

use crate::{components::workout_log::WorkoutLog, configuration::Settings};

/// Everything the engine needs that is created before the server starts.
pub struct Kits {
    pub listener: TcpListener,
    pub workout_log: WorkoutLog,
}

impl Kits {
    pub fn new(listener: TcpListener, workout_log: WorkoutLog) -> Self {
        Self {
            listener,
            workout_log,
        }
    }

    pub fn prepare(config: &Settings) -> Result<Self, std::io::Error> {
        Ok(Self {
            listener: prepare_listener(config)?,
            workout_log: WorkoutLog::new(),
        })
    }
}

pub fn prepare_listener(config: &Settings) -> Result<TcpListener, std::io::Error> {
    let address = config.application.address();
    tracing::info!("Binding listener on {address}");
    TcpListener::bind(address)
}
