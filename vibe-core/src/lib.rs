//! Core library for Vibe Studio.
//!
//! Holds everything behind the landing page that is not pixels: the fixed
//! slide catalog, the carousel controller with its wraparound navigation and
//! hover pause gate, the tokio-driven auto-advance ticker, and the
//! configuration loader shared by the desktop app and the headless runner.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;

pub use carousel::{AutoAdvance, Carousel, CarouselHandle, CarouselSnapshot};
pub use catalog::{Badge, CatalogError, Slide, SlideCatalog};
pub use config::{ConfigLoadError, ConfigLoader, EnvConfig, LandingConfig};
pub use error::CarouselError;
