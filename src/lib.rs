pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod console;
pub mod cycler;
pub mod events;
pub mod gesture;
pub mod indicators;
pub mod keys;
pub mod settings;
pub mod view;
pub mod tasks {
    pub mod carousel;
}
