//! Deployment adapters of frameworks with pluggable output targets.

use std::fmt::Display;

use crate::ecosystem::{framework::Framework, node::package_json::PackageJson};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterType {
    Node,
    Static,
    Vercel,
    Netlify,
    Cloudflare,
    Deno,
    Unknown,
}

/// How the built output is meant to be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Long-running server process
    Server,
    /// Plain files behind a reverse proxy or CDN
    Static,
    /// Output only runs on a managed hosting platform
    Platform,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkAdapter {
    pub kind: AdapterType,
    /// Adapter package that decided the type, if any
    pub package: Option<String>,
    pub run_mode: RunMode,
}

impl FrameworkAdapter {
    fn new(kind: AdapterType, package: Option<String>) -> Self {
        Self {
            kind,
            package,
            run_mode: kind.run_mode(),
        }
    }
}

impl AdapterType {
    pub fn run_mode(&self) -> RunMode {
        match self {
            AdapterType::Node | AdapterType::Unknown => RunMode::Server,
            AdapterType::Static => RunMode::Static,
            AdapterType::Vercel
            | AdapterType::Netlify
            | AdapterType::Cloudflare
            | AdapterType::Deno => RunMode::Platform,
        }
    }
}

impl Display for AdapterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdapterType::Node => f.write_str("node"),
            AdapterType::Static => f.write_str("static"),
            AdapterType::Vercel => f.write_str("vercel"),
            AdapterType::Netlify => f.write_str("netlify"),
            AdapterType::Cloudflare => f.write_str("cloudflare"),
            AdapterType::Deno => f.write_str("deno"),
            AdapterType::Unknown => f.write_str("unknown"),
        }
    }
}

// Platform adapters come before node ones: Remix platform projects also
// depend on @remix-run/node.
const SVELTEKIT_ADAPTERS: &[(&str, AdapterType)] = &[
    ("@sveltejs/adapter-vercel", AdapterType::Vercel),
    ("@sveltejs/adapter-netlify", AdapterType::Netlify),
    ("@sveltejs/adapter-cloudflare", AdapterType::Cloudflare),
    ("@sveltejs/adapter-cloudflare-workers", AdapterType::Cloudflare),
    ("svelte-adapter-deno", AdapterType::Deno),
    ("@sveltejs/adapter-static", AdapterType::Static),
    ("@sveltejs/adapter-node", AdapterType::Node),
    ("@sveltejs/adapter-auto", AdapterType::Unknown),
];

const ASTRO_ADAPTERS: &[(&str, AdapterType)] = &[
    ("@astrojs/vercel", AdapterType::Vercel),
    ("@astrojs/netlify", AdapterType::Netlify),
    ("@astrojs/cloudflare", AdapterType::Cloudflare),
    ("@astrojs/deno", AdapterType::Deno),
    ("@deno/astro-adapter", AdapterType::Deno),
    ("@astrojs/node", AdapterType::Node),
];

const REMIX_ADAPTERS: &[(&str, AdapterType)] = &[
    ("@remix-run/vercel", AdapterType::Vercel),
    ("@vercel/remix", AdapterType::Vercel),
    ("@remix-run/netlify", AdapterType::Netlify),
    ("@netlify/remix-adapter", AdapterType::Netlify),
    ("@remix-run/cloudflare-pages", AdapterType::Cloudflare),
    ("@remix-run/cloudflare", AdapterType::Cloudflare),
    ("@remix-run/deno", AdapterType::Deno),
    ("@remix-run/serve", AdapterType::Node),
    ("@remix-run/express", AdapterType::Node),
    ("@remix-run/node", AdapterType::Node),
];

/// Classify the deployment target of `framework` from the merged
/// dependencies of its manifest.
pub fn detect_framework_adapter(
    pkg: &PackageJson,
    framework: Framework,
) -> FrameworkAdapter {
    let (table, default): (&[(&str, AdapterType)], AdapterType) =
        match framework {
            Framework::Svelte => (SVELTEKIT_ADAPTERS, AdapterType::Node),
            Framework::Astro => (ASTRO_ADAPTERS, AdapterType::Static),
            Framework::Remix => (REMIX_ADAPTERS, AdapterType::Node),
            _ => (&[], AdapterType::Unknown),
        };

    for (package, kind) in table {
        if pkg.has_dependency(package) {
            return FrameworkAdapter::new(*kind, Some(package.to_string()));
        }
    }

    FrameworkAdapter::new(default, None)
}
