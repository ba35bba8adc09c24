pub mod workout_log;
