//! Static dispatch from a framework's ecosystem to its plan builder.

use crate::{
    detection::types::Plan,
    ecosystem::{
        docker::planner::DockerPlanner,
        dotnet::planner::DotNetPlanner,
        elixir::planner::ElixirPlanner,
        framework::{Ecosystem, Framework},
        go::planner::GoPlanner,
        java::planner::JavaPlanner,
        node::planner::NodePlanner,
        php::planner::PhpPlanner,
        python::planner::PythonPlanner,
        ruby::planner::RubyPlanner,
        rust::planner::RustPlanner,
        static_site::planner::StaticSitePlanner,
        traits::PlanBuilder,
    },
    fs::FileSystem,
};

/// Language-specific plan builder, selected only after scoring.
pub enum Planner {
    Node(NodePlanner),
    Python(PythonPlanner),
    Ruby(RubyPlanner),
    Php(PhpPlanner),
    Go(GoPlanner),
    Rust(RustPlanner),
    Java(JavaPlanner),
    DotNet(DotNetPlanner),
    Elixir(ElixirPlanner),
    Static(StaticSitePlanner),
    Docker(DockerPlanner),
}

impl Planner {
    pub fn new(ecosystem: Ecosystem) -> Self {
        match ecosystem {
            Ecosystem::Node => Planner::Node(NodePlanner::new()),
            Ecosystem::Python => Planner::Python(PythonPlanner::new()),
            Ecosystem::Ruby => Planner::Ruby(RubyPlanner::new()),
            Ecosystem::Php => Planner::Php(PhpPlanner::new()),
            Ecosystem::Go => Planner::Go(GoPlanner::new()),
            Ecosystem::Rust => Planner::Rust(RustPlanner::new()),
            Ecosystem::Java => Planner::Java(JavaPlanner::new()),
            Ecosystem::DotNet => Planner::DotNet(DotNetPlanner::new()),
            Ecosystem::Elixir => Planner::Elixir(ElixirPlanner::new()),
            Ecosystem::Static => Planner::Static(StaticSitePlanner::new()),
            Ecosystem::Docker => Planner::Docker(DockerPlanner::new()),
        }
    }
}

impl PlanBuilder for Planner {
    fn build_plan(&self, framework: Framework, fs: &dyn FileSystem) -> Plan {
        match self {
            Planner::Node(p) => p.build_plan(framework, fs),
            Planner::Python(p) => p.build_plan(framework, fs),
            Planner::Ruby(p) => p.build_plan(framework, fs),
            Planner::Php(p) => p.build_plan(framework, fs),
            Planner::Go(p) => p.build_plan(framework, fs),
            Planner::Rust(p) => p.build_plan(framework, fs),
            Planner::Java(p) => p.build_plan(framework, fs),
            Planner::DotNet(p) => p.build_plan(framework, fs),
            Planner::Elixir(p) => p.build_plan(framework, fs),
            Planner::Static(p) => p.build_plan(framework, fs),
            Planner::Docker(p) => p.build_plan(framework, fs),
        }
    }
}

impl std::fmt::Debug for Planner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Planner::Node(_) => write!(f, "Planner::Node"),
            Planner::Python(_) => write!(f, "Planner::Python"),
            Planner::Ruby(_) => write!(f, "Planner::Ruby"),
            Planner::Php(_) => write!(f, "Planner::Php"),
            Planner::Go(_) => write!(f, "Planner::Go"),
            Planner::Rust(_) => write!(f, "Planner::Rust"),
            Planner::Java(_) => write!(f, "Planner::Java"),
            Planner::DotNet(_) => write!(f, "Planner::DotNet"),
            Planner::Elixir(_) => write!(f, "Planner::Elixir"),
            Planner::Static(_) => write!(f, "Planner::Static"),
            Planner::Docker(_) => write!(f, "Planner::Docker"),
        }
    }
}
