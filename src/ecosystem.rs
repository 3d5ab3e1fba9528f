//! Per-language detectors and plan builders.

pub mod dispatch;
pub mod docker;
pub mod dotnet;
pub mod elixir;
pub mod framework;
pub mod go;
pub mod java;
pub mod node;
pub mod php;
pub mod python;
pub mod ruby;
pub mod rust;
pub mod static_site;
pub mod traits;

use crate::ecosystem::{
    docker::detector::DockerDetector, dotnet::detector::DotNetDetector,
    elixir::detector::ElixirDetector, go::detector::GoDetector,
    java::detector::JavaDetector, node::detector::NodeDetector,
    php::detector::PhpDetector, python::detector::PythonDetector,
    ruby::detector::RubyDetector, rust::detector::RustDetector,
    static_site::detector::StaticSiteDetector, traits::LanguageDetector,
};

/// Every language detector, in tie-break order.
pub fn detectors() -> Vec<Box<dyn LanguageDetector>> {
    vec![
        Box::new(NodeDetector::new()),
        Box::new(PythonDetector::new()),
        Box::new(RubyDetector::new()),
        Box::new(PhpDetector::new()),
        Box::new(GoDetector::new()),
        Box::new(RustDetector::new()),
        Box::new(JavaDetector::new()),
        Box::new(DotNetDetector::new()),
        Box::new(ElixirDetector::new()),
        Box::new(StaticSiteDetector::new()),
        Box::new(DockerDetector::new()),
    ]
}
