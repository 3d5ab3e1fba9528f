use serde::Serialize;
use std::fmt::Display;

/// Language family a framework belongs to. Selects the detector module and
/// plan builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ecosystem {
    Node,
    Python,
    Ruby,
    Php,
    Go,
    Rust,
    Java,
    DotNet,
    Elixir,
    Static,
    Docker,
}

impl Ecosystem {
    /// Language label reported on candidates.
    pub fn language(&self) -> &'static str {
        match self {
            Ecosystem::Node => "JavaScript/TypeScript",
            Ecosystem::Python => "Python",
            Ecosystem::Ruby => "Ruby",
            Ecosystem::Php => "PHP",
            Ecosystem::Go => "Go",
            Ecosystem::Rust => "Rust",
            Ecosystem::Java => "Java",
            Ecosystem::DotNet => "C#",
            Ecosystem::Elixir => "Elixir",
            Ecosystem::Static => "HTML",
            Ecosystem::Docker => "Docker",
        }
    }
}

/// Every framework launchpad can detect and plan for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Framework {
    // JavaScript / TypeScript
    NextJs,
    Nuxt,
    Remix,
    Astro,
    Svelte,
    Vue,
    Angular,
    Gatsby,
    React,
    Vite,
    NestJs,
    Express,
    Fastify,
    Hono,
    Deno,
    Node,
    // Python
    Django,
    FastApi,
    Flask,
    Python,
    // Ruby
    Rails,
    Sinatra,
    Ruby,
    // PHP
    Laravel,
    Symfony,
    Php,
    // Go
    Gin,
    Echo,
    Fiber,
    Chi,
    Go,
    // Rust
    Axum,
    ActixWeb,
    Rocket,
    Rust,
    // Java
    SpringBoot,
    Quarkus,
    Java,
    // C#
    AspNetCore,
    DotNet,
    // Elixir
    Phoenix,
    Elixir,
    // Static sites
    Hugo,
    Jekyll,
    StaticSite,
    // Containers
    DockerCompose,
    Dockerfile,
}

impl Framework {
    pub const ALL: &'static [Framework] = &[
        Framework::NextJs,
        Framework::Nuxt,
        Framework::Remix,
        Framework::Astro,
        Framework::Svelte,
        Framework::Vue,
        Framework::Angular,
        Framework::Gatsby,
        Framework::React,
        Framework::Vite,
        Framework::NestJs,
        Framework::Express,
        Framework::Fastify,
        Framework::Hono,
        Framework::Deno,
        Framework::Node,
        Framework::Django,
        Framework::FastApi,
        Framework::Flask,
        Framework::Python,
        Framework::Rails,
        Framework::Sinatra,
        Framework::Ruby,
        Framework::Laravel,
        Framework::Symfony,
        Framework::Php,
        Framework::Gin,
        Framework::Echo,
        Framework::Fiber,
        Framework::Chi,
        Framework::Go,
        Framework::Axum,
        Framework::ActixWeb,
        Framework::Rocket,
        Framework::Rust,
        Framework::SpringBoot,
        Framework::Quarkus,
        Framework::Java,
        Framework::AspNetCore,
        Framework::DotNet,
        Framework::Phoenix,
        Framework::Elixir,
        Framework::Hugo,
        Framework::Jekyll,
        Framework::StaticSite,
        Framework::DockerCompose,
        Framework::Dockerfile,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Framework::NextJs => "Next.js",
            Framework::Nuxt => "Nuxt",
            Framework::Remix => "Remix",
            Framework::Astro => "Astro",
            Framework::Svelte => "Svelte",
            Framework::Vue => "Vue",
            Framework::Angular => "Angular",
            Framework::Gatsby => "Gatsby",
            Framework::React => "React",
            Framework::Vite => "Vite",
            Framework::NestJs => "NestJS",
            Framework::Express => "Express",
            Framework::Fastify => "Fastify",
            Framework::Hono => "Hono",
            Framework::Deno => "Deno",
            Framework::Node => "Node.js",
            Framework::Django => "Django",
            Framework::FastApi => "FastAPI",
            Framework::Flask => "Flask",
            Framework::Python => "Python",
            Framework::Rails => "Rails",
            Framework::Sinatra => "Sinatra",
            Framework::Ruby => "Ruby",
            Framework::Laravel => "Laravel",
            Framework::Symfony => "Symfony",
            Framework::Php => "PHP",
            Framework::Gin => "Gin",
            Framework::Echo => "Echo",
            Framework::Fiber => "Fiber",
            Framework::Chi => "Chi",
            Framework::Go => "Go",
            Framework::Axum => "Axum",
            Framework::ActixWeb => "Actix Web",
            Framework::Rocket => "Rocket",
            Framework::Rust => "Rust",
            Framework::SpringBoot => "Spring Boot",
            Framework::Quarkus => "Quarkus",
            Framework::Java => "Java",
            Framework::AspNetCore => "ASP.NET Core",
            Framework::DotNet => ".NET",
            Framework::Phoenix => "Phoenix",
            Framework::Elixir => "Elixir",
            Framework::Hugo => "Hugo",
            Framework::Jekyll => "Jekyll",
            Framework::StaticSite => "Static Site",
            Framework::DockerCompose => "Docker Compose",
            Framework::Dockerfile => "Docker",
        }
    }

    pub fn ecosystem(&self) -> Ecosystem {
        match self {
            Framework::NextJs
            | Framework::Nuxt
            | Framework::Remix
            | Framework::Astro
            | Framework::Svelte
            | Framework::Vue
            | Framework::Angular
            | Framework::Gatsby
            | Framework::React
            | Framework::Vite
            | Framework::NestJs
            | Framework::Express
            | Framework::Fastify
            | Framework::Hono
            | Framework::Deno
            | Framework::Node => Ecosystem::Node,
            Framework::Django
            | Framework::FastApi
            | Framework::Flask
            | Framework::Python => Ecosystem::Python,
            Framework::Rails | Framework::Sinatra | Framework::Ruby => {
                Ecosystem::Ruby
            }
            Framework::Laravel | Framework::Symfony | Framework::Php => {
                Ecosystem::Php
            }
            Framework::Gin
            | Framework::Echo
            | Framework::Fiber
            | Framework::Chi
            | Framework::Go => Ecosystem::Go,
            Framework::Axum
            | Framework::ActixWeb
            | Framework::Rocket
            | Framework::Rust => Ecosystem::Rust,
            Framework::SpringBoot | Framework::Quarkus | Framework::Java => {
                Ecosystem::Java
            }
            Framework::AspNetCore | Framework::DotNet => Ecosystem::DotNet,
            Framework::Phoenix | Framework::Elixir => Ecosystem::Elixir,
            Framework::Hugo | Framework::Jekyll | Framework::StaticSite => {
                Ecosystem::Static
            }
            Framework::DockerCompose | Framework::Dockerfile => {
                Ecosystem::Docker
            }
        }
    }

    pub fn language(&self) -> &'static str {
        self.ecosystem().language()
    }
}

impl Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
