//! The static technology registry.
//!
//! Roughly 190 language and technology profiles with category weights,
//! aliases, ecosystem keywords, and tags. The table is defined at build
//! time and exposed through a lazily-built lookup index; nothing mutates
//! it after process start, so unsynchronized concurrent reads are safe.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::category::SkillCategory::{
    AiMl, Backend, Database, DevOps, Frontend, Infrastructure,
};
use crate::profile::LanguageProfile;

/// All known technology profiles.
pub static PROFILES: &[LanguageProfile] = &[
    // ------------------------------------------------------------------
    // General-purpose languages
    // ------------------------------------------------------------------
    LanguageProfile {
        name: "Rust",
        aliases: &["rustlang", "rust-lang"],
        weights: &[(Backend, 0.72), (Infrastructure, 0.48)],
        ecosystem: &["cargo", "tokio", "actix", "axum", "wasm", "clippy"],
        tags: &["systems", "performance", "memory-safety"],
    },
    LanguageProfile {
        name: "Python",
        aliases: &["py", "python3", "cpython"],
        weights: &[(Backend, 0.62), (AiMl, 0.52)],
        ecosystem: &["pip", "django", "flask", "fastapi", "pandas", "numpy"],
        tags: &["scripting", "data-science", "automation"],
    },
    LanguageProfile {
        name: "JavaScript",
        aliases: &["js", "ecmascript", "es6", "es2015"],
        weights: &[(Frontend, 0.62), (Backend, 0.42)],
        ecosystem: &["npm", "node", "react", "webpack", "babel"],
        tags: &["web", "scripting"],
    },
    LanguageProfile {
        name: "TypeScript",
        aliases: &["ts", "tsx"],
        weights: &[(Frontend, 0.58), (Backend, 0.46)],
        ecosystem: &["tsc", "npm", "react", "angular", "nestjs", "deno"],
        tags: &["web", "typed", "tooling"],
    },
    LanguageProfile {
        name: "Go",
        aliases: &["golang"],
        weights: &[(Backend, 0.68), (Infrastructure, 0.5)],
        ecosystem: &["goroutine", "gin", "grpc", "kubernetes", "cobra"],
        tags: &["systems", "cloud", "concurrency"],
    },
    LanguageProfile {
        name: "Java",
        aliases: &["jdk", "jvm"],
        weights: &[(Backend, 0.72)],
        ecosystem: &["maven", "gradle", "spring", "hibernate", "junit"],
        tags: &["enterprise", "jvm"],
    },
    LanguageProfile {
        name: "Kotlin",
        aliases: &["kt", "kts"],
        weights: &[(Backend, 0.52), (Frontend, 0.38)],
        ecosystem: &["gradle", "ktor", "android", "compose", "coroutines"],
        tags: &["jvm", "android", "mobile"],
    },
    LanguageProfile {
        name: "Swift",
        aliases: &["swiftlang"],
        weights: &[(Frontend, 0.55), (Backend, 0.25)],
        ecosystem: &["xcode", "swiftui", "cocoapods", "vapor"],
        tags: &["ios", "apple", "mobile"],
    },
    LanguageProfile {
        name: "C",
        aliases: &["clang", "ansi-c"],
        weights: &[(Infrastructure, 0.58), (Backend, 0.4)],
        ecosystem: &["gcc", "make", "cmake", "posix", "embedded"],
        tags: &["systems", "low-level"],
    },
    LanguageProfile {
        name: "C++",
        aliases: &["cpp", "cplusplus", "cxx"],
        weights: &[(Infrastructure, 0.55), (Backend, 0.45)],
        ecosystem: &["cmake", "boost", "qt", "stl", "conan"],
        tags: &["systems", "performance", "games"],
    },
    LanguageProfile {
        name: "C#",
        aliases: &["csharp", "cs", "dotnet-csharp"],
        weights: &[(Backend, 0.65), (Frontend, 0.25)],
        ecosystem: &["dotnet", "aspnet", "nuget", "unity", "blazor"],
        tags: &["enterprise", "games", "microsoft"],
    },
    LanguageProfile {
        name: "Ruby",
        aliases: &["rb", "ruby-lang"],
        weights: &[(Backend, 0.68)],
        ecosystem: &["gem", "rails", "bundler", "rspec", "sinatra"],
        tags: &["web", "scripting"],
    },
    LanguageProfile {
        name: "PHP",
        aliases: &["php7", "php8"],
        weights: &[(Backend, 0.66)],
        ecosystem: &["composer", "laravel", "symfony", "wordpress"],
        tags: &["web", "cms"],
    },
    LanguageProfile {
        name: "Scala",
        aliases: &["scala3"],
        weights: &[(Backend, 0.58), (AiMl, 0.3)],
        ecosystem: &["sbt", "akka", "spark", "play", "cats"],
        tags: &["jvm", "functional", "big-data"],
    },
    LanguageProfile {
        name: "Haskell",
        aliases: &["hs", "ghc"],
        weights: &[(Backend, 0.6)],
        ecosystem: &["cabal", "stack", "hackage"],
        tags: &["functional", "academic"],
    },
    LanguageProfile {
        name: "Elixir",
        aliases: &["ex", "exs"],
        weights: &[(Backend, 0.68)],
        ecosystem: &["mix", "phoenix", "hex", "otp", "ecto"],
        tags: &["functional", "concurrency", "erlang-vm"],
    },
    LanguageProfile {
        name: "Erlang",
        aliases: &["erl", "otp"],
        weights: &[(Backend, 0.6), (Infrastructure, 0.3)],
        ecosystem: &["rebar", "beam", "cowboy"],
        tags: &["telecom", "concurrency"],
    },
    LanguageProfile {
        name: "Clojure",
        aliases: &["clj", "cljs", "clojurescript"],
        weights: &[(Backend, 0.58), (Frontend, 0.22)],
        ecosystem: &["leiningen", "ring", "reagent"],
        tags: &["jvm", "functional", "lisp"],
    },
    LanguageProfile {
        name: "OCaml",
        aliases: &["ml", "mli", "reasonml"],
        weights: &[(Backend, 0.58)],
        ecosystem: &["opam", "dune"],
        tags: &["functional", "compilers"],
    },
    LanguageProfile {
        name: "F#",
        aliases: &["fsharp", "fs"],
        weights: &[(Backend, 0.55)],
        ecosystem: &["dotnet", "fable", "paket"],
        tags: &["functional", "microsoft"],
    },
    LanguageProfile {
        name: "R",
        aliases: &["rlang", "r-lang", "rstats"],
        weights: &[(AiMl, 0.7)],
        ecosystem: &["cran", "ggplot2", "tidyverse", "shiny", "rmarkdown"],
        tags: &["statistics", "data-science"],
    },
    LanguageProfile {
        name: "Julia",
        aliases: &["jl", "julialang"],
        weights: &[(AiMl, 0.62), (Backend, 0.2)],
        ecosystem: &["flux", "pluto", "dataframes"],
        tags: &["scientific", "numerical"],
    },
    LanguageProfile {
        name: "Dart",
        aliases: &["dartlang"],
        weights: &[(Frontend, 0.6)],
        ecosystem: &["flutter", "pub", "widgets"],
        tags: &["mobile", "cross-platform"],
    },
    LanguageProfile {
        name: "Lua",
        aliases: &["luajit"],
        weights: &[(Backend, 0.42), (Infrastructure, 0.28)],
        ecosystem: &["luarocks", "neovim", "openresty", "love2d"],
        tags: &["scripting", "embedded", "games"],
    },
    LanguageProfile {
        name: "Perl",
        aliases: &["perl5", "pl"],
        weights: &[(Backend, 0.45), (DevOps, 0.25)],
        ecosystem: &["cpan", "mojolicious"],
        tags: &["scripting", "text-processing"],
    },
    LanguageProfile {
        name: "Zig",
        aliases: &["ziglang"],
        weights: &[(Infrastructure, 0.55), (Backend, 0.35)],
        ecosystem: &["comptime", "zls"],
        tags: &["systems", "low-level"],
    },
    LanguageProfile {
        name: "Nim",
        aliases: &["nimlang"],
        weights: &[(Backend, 0.5), (Infrastructure, 0.3)],
        ecosystem: &["nimble"],
        tags: &["systems", "scripting"],
    },
    LanguageProfile {
        name: "Crystal",
        aliases: &["crystal-lang"],
        weights: &[(Backend, 0.55)],
        ecosystem: &["shards", "kemal"],
        tags: &["ruby-like", "compiled"],
    },
    LanguageProfile {
        name: "Groovy",
        aliases: &["apache-groovy"],
        weights: &[(Backend, 0.4), (DevOps, 0.35)],
        ecosystem: &["gradle", "jenkins", "grails", "spock"],
        tags: &["jvm", "scripting", "build"],
    },
    LanguageProfile {
        name: "Objective-C",
        aliases: &["objc", "objectivec"],
        weights: &[(Frontend, 0.5), (Backend, 0.2)],
        ecosystem: &["xcode", "cocoapods", "uikit"],
        tags: &["ios", "apple", "legacy"],
    },
    LanguageProfile {
        name: "MATLAB",
        aliases: &["octave"],
        weights: &[(AiMl, 0.6)],
        ecosystem: &["simulink", "toolbox"],
        tags: &["scientific", "engineering"],
    },
    LanguageProfile {
        name: "Fortran",
        aliases: &["f90", "f95"],
        weights: &[(AiMl, 0.42), (Infrastructure, 0.25)],
        ecosystem: &["lapack", "mpi", "hpc"],
        tags: &["scientific", "legacy", "numerical"],
    },
    LanguageProfile {
        name: "COBOL",
        aliases: &["cbl"],
        weights: &[(Backend, 0.5)],
        ecosystem: &["mainframe", "cics"],
        tags: &["legacy", "enterprise"],
    },
    LanguageProfile {
        name: "Assembly",
        aliases: &["asm", "nasm", "x86-asm"],
        weights: &[(Infrastructure, 0.6)],
        ecosystem: &["bootloader", "firmware", "reverse-engineering"],
        tags: &["low-level", "embedded"],
    },
    LanguageProfile {
        name: "Shell",
        aliases: &["sh", "bash", "zsh", "shell-script"],
        weights: &[(DevOps, 0.58), (Infrastructure, 0.35)],
        ecosystem: &["coreutils", "cron", "systemd", "dotfiles"],
        tags: &["scripting", "automation", "unix"],
    },
    LanguageProfile {
        name: "PowerShell",
        aliases: &["pwsh", "ps1"],
        weights: &[(DevOps, 0.55), (Infrastructure, 0.3)],
        ecosystem: &["cmdlet", "windows", "azure"],
        tags: &["scripting", "automation", "microsoft"],
    },
    LanguageProfile {
        name: "Elm",
        aliases: &["elm-lang"],
        weights: &[(Frontend, 0.72)],
        ecosystem: &["elm-ui"],
        tags: &["functional", "web"],
    },
    LanguageProfile {
        name: "PureScript",
        aliases: &["purs"],
        weights: &[(Frontend, 0.6)],
        ecosystem: &["spago", "halogen"],
        tags: &["functional", "web"],
    },
    LanguageProfile {
        name: "CoffeeScript",
        aliases: &["coffee"],
        weights: &[(Frontend, 0.52)],
        ecosystem: &["npm"],
        tags: &["web", "legacy"],
    },
    LanguageProfile {
        name: "Solidity",
        aliases: &["sol"],
        weights: &[(Backend, 0.55)],
        ecosystem: &["ethereum", "hardhat", "truffle", "web3"],
        tags: &["blockchain", "smart-contracts"],
    },
    LanguageProfile {
        name: "D",
        aliases: &["dlang"],
        weights: &[(Backend, 0.45), (Infrastructure, 0.3)],
        ecosystem: &["dub"],
        tags: &["systems"],
    },
    LanguageProfile {
        name: "Racket",
        aliases: &["rkt"],
        weights: &[(Backend, 0.5)],
        ecosystem: &["drracket"],
        tags: &["lisp", "academic"],
    },
    LanguageProfile {
        name: "Scheme",
        aliases: &["guile", "chicken-scheme"],
        weights: &[(Backend, 0.45)],
        ecosystem: &["sicp"],
        tags: &["lisp", "academic"],
    },
    LanguageProfile {
        name: "Common Lisp",
        aliases: &["lisp", "sbcl"],
        weights: &[(Backend, 0.48)],
        ecosystem: &["quicklisp", "asdf"],
        tags: &["lisp"],
    },
    LanguageProfile {
        name: "Prolog",
        aliases: &["swi-prolog"],
        weights: &[(AiMl, 0.5), (Backend, 0.2)],
        ecosystem: &["datalog"],
        tags: &["logic", "academic"],
    },
    LanguageProfile {
        name: "Ada",
        aliases: &["ada95", "spark-ada"],
        weights: &[(Infrastructure, 0.5)],
        ecosystem: &["gnat"],
        tags: &["safety-critical", "embedded"],
    },
    LanguageProfile {
        name: "Pascal",
        aliases: &["delphi", "freepascal", "object-pascal"],
        weights: &[(Backend, 0.4)],
        ecosystem: &["lazarus"],
        tags: &["legacy", "desktop"],
    },
    LanguageProfile {
        name: "Visual Basic",
        aliases: &["vb", "vbnet", "vba"],
        weights: &[(Backend, 0.42)],
        ecosystem: &["dotnet", "excel"],
        tags: &["microsoft", "legacy"],
    },
    LanguageProfile {
        name: "Gleam",
        aliases: &["gleam-lang"],
        weights: &[(Backend, 0.55)],
        ecosystem: &["beam", "hex"],
        tags: &["functional", "typed"],
    },
    LanguageProfile {
        name: "ReScript",
        aliases: &["bucklescript", "reason"],
        weights: &[(Frontend, 0.58)],
        ecosystem: &["rescript-react"],
        tags: &["typed", "web"],
    },
    LanguageProfile {
        name: "WebAssembly",
        aliases: &["wasm", "wat"],
        weights: &[(Frontend, 0.4), (Infrastructure, 0.35)],
        ecosystem: &["emscripten", "wasmtime", "wasi"],
        tags: &["web", "portable", "performance"],
    },
    LanguageProfile {
        name: "Vala",
        aliases: &["valac"],
        weights: &[(Frontend, 0.4), (Backend, 0.25)],
        ecosystem: &["gtk", "gnome"],
        tags: &["desktop", "linux"],
    },
    LanguageProfile {
        name: "Haxe",
        aliases: &["hx"],
        weights: &[(Frontend, 0.45), (Backend, 0.25)],
        ecosystem: &["haxelib", "openfl"],
        tags: &["games", "cross-platform"],
    },
    LanguageProfile {
        name: "V",
        aliases: &["vlang"],
        weights: &[(Backend, 0.45), (Infrastructure, 0.25)],
        ecosystem: &["vpm"],
        tags: &["systems", "compiled"],
    },
    // ------------------------------------------------------------------
    // Markup, styling, and query languages
    // ------------------------------------------------------------------
    LanguageProfile {
        name: "HTML",
        aliases: &["html5", "xhtml"],
        weights: &[(Frontend, 0.68)],
        ecosystem: &["dom", "semantic-html", "accessibility"],
        tags: &["web", "markup"],
    },
    LanguageProfile {
        name: "CSS",
        aliases: &["css3", "stylesheets"],
        weights: &[(Frontend, 0.7)],
        ecosystem: &["flexbox", "grid", "animations", "responsive"],
        tags: &["web", "styling"],
    },
    LanguageProfile {
        name: "Sass",
        aliases: &["scss"],
        weights: &[(Frontend, 0.66)],
        ecosystem: &["mixins", "css"],
        tags: &["styling", "preprocessor"],
    },
    LanguageProfile {
        name: "Less",
        aliases: &["lesscss"],
        weights: &[(Frontend, 0.6)],
        ecosystem: &["css"],
        tags: &["styling", "preprocessor"],
    },
    LanguageProfile {
        name: "Markdown",
        aliases: &["md", "commonmark", "mdx"],
        weights: &[(Frontend, 0.3), (DevOps, 0.2)],
        ecosystem: &["docs", "readme", "wiki"],
        tags: &["documentation", "markup"],
    },
    LanguageProfile {
        name: "SQL",
        aliases: &["plsql", "tsql", "plpgsql"],
        weights: &[(Database, 0.74)],
        ecosystem: &["queries", "joins", "stored-procedures", "migrations"],
        tags: &["data", "relational"],
    },
    LanguageProfile {
        name: "GraphQL",
        aliases: &["gql"],
        weights: &[(Backend, 0.5), (Frontend, 0.3)],
        ecosystem: &["apollo", "relay", "schema", "resolvers"],
        tags: &["api", "query-language"],
    },
    // ------------------------------------------------------------------
    // Frontend frameworks and tooling
    // ------------------------------------------------------------------
    LanguageProfile {
        name: "React",
        aliases: &["reactjs", "react.js"],
        weights: &[(Frontend, 0.78)],
        ecosystem: &["jsx", "hooks", "redux", "next", "vite"],
        tags: &["web", "ui", "spa"],
    },
    LanguageProfile {
        name: "Vue",
        aliases: &["vuejs", "vue.js", "vue3"],
        weights: &[(Frontend, 0.78)],
        ecosystem: &["nuxt", "pinia", "vite", "composition-api"],
        tags: &["web", "ui", "spa"],
    },
    LanguageProfile {
        name: "Angular",
        aliases: &["angularjs", "angular2"],
        weights: &[(Frontend, 0.76)],
        ecosystem: &["rxjs", "ngrx", "typescript"],
        tags: &["web", "ui", "enterprise"],
    },
    LanguageProfile {
        name: "Svelte",
        aliases: &["sveltejs", "sveltekit"],
        weights: &[(Frontend, 0.76)],
        ecosystem: &["vite", "stores"],
        tags: &["web", "ui", "compiler"],
    },
    LanguageProfile {
        name: "Next.js",
        aliases: &["nextjs", "next"],
        weights: &[(Frontend, 0.66), (Backend, 0.3)],
        ecosystem: &["react", "vercel", "ssr", "app-router"],
        tags: &["web", "fullstack", "ssr"],
    },
    LanguageProfile {
        name: "Nuxt",
        aliases: &["nuxtjs", "nuxt.js"],
        weights: &[(Frontend, 0.64), (Backend, 0.26)],
        ecosystem: &["vue", "ssr", "nitro"],
        tags: &["web", "fullstack", "ssr"],
    },
    LanguageProfile {
        name: "Gatsby",
        aliases: &["gatsbyjs"],
        weights: &[(Frontend, 0.68)],
        ecosystem: &["react", "graphql", "static-site"],
        tags: &["web", "static-site"],
    },
    LanguageProfile {
        name: "Remix",
        aliases: &["remix-run"],
        weights: &[(Frontend, 0.6), (Backend, 0.3)],
        ecosystem: &["react", "loaders"],
        tags: &["web", "fullstack"],
    },
    LanguageProfile {
        name: "Astro",
        aliases: &["astrojs", "astro-build"],
        weights: &[(Frontend, 0.68)],
        ecosystem: &["islands", "static-site", "mdx"],
        tags: &["web", "static-site"],
    },
    LanguageProfile {
        name: "SolidJS",
        aliases: &["solid-js", "solidjs"],
        weights: &[(Frontend, 0.7)],
        ecosystem: &["signals", "vite"],
        tags: &["web", "ui", "reactive"],
    },
    LanguageProfile {
        name: "Ember",
        aliases: &["emberjs", "ember.js"],
        weights: &[(Frontend, 0.66)],
        ecosystem: &["glimmer", "ember-cli"],
        tags: &["web", "ui", "convention"],
    },
    LanguageProfile {
        name: "jQuery",
        aliases: &["jquery-ui"],
        weights: &[(Frontend, 0.6)],
        ecosystem: &["dom", "ajax"],
        tags: &["web", "legacy"],
    },
    LanguageProfile {
        name: "Tailwind CSS",
        aliases: &["tailwindcss", "tailwind"],
        weights: &[(Frontend, 0.7)],
        ecosystem: &["postcss", "utility-classes", "daisyui"],
        tags: &["styling", "utility-first"],
    },
    LanguageProfile {
        name: "Bootstrap",
        aliases: &["bootstrap5", "twbs"],
        weights: &[(Frontend, 0.62)],
        ecosystem: &["responsive", "components"],
        tags: &["styling", "components"],
    },
    LanguageProfile {
        name: "Redux",
        aliases: &["redux-toolkit", "rtk"],
        weights: &[(Frontend, 0.64)],
        ecosystem: &["react", "state-management", "thunk"],
        tags: &["web", "state"],
    },
    LanguageProfile {
        name: "Webpack",
        aliases: &["webpack5"],
        weights: &[(Frontend, 0.52), (DevOps, 0.25)],
        ecosystem: &["loaders", "bundler", "babel"],
        tags: &["tooling", "bundler"],
    },
    LanguageProfile {
        name: "Vite",
        aliases: &["vitejs"],
        weights: &[(Frontend, 0.55), (DevOps, 0.2)],
        ecosystem: &["esbuild", "rollup", "hmr"],
        tags: &["tooling", "bundler"],
    },
    LanguageProfile {
        name: "Electron",
        aliases: &["electronjs"],
        weights: &[(Frontend, 0.6), (Backend, 0.2)],
        ecosystem: &["chromium", "desktop-app"],
        tags: &["desktop", "cross-platform"],
    },
    LanguageProfile {
        name: "React Native",
        aliases: &["react-native", "rn"],
        weights: &[(Frontend, 0.7)],
        ecosystem: &["expo", "metro", "ios", "android"],
        tags: &["mobile", "cross-platform"],
    },
    LanguageProfile {
        name: "Flutter",
        aliases: &["flutter-app"],
        weights: &[(Frontend, 0.72)],
        ecosystem: &["dart", "widgets", "pub"],
        tags: &["mobile", "cross-platform", "ui"],
    },
    LanguageProfile {
        name: "Ionic",
        aliases: &["ionic-framework"],
        weights: &[(Frontend, 0.62)],
        ecosystem: &["capacitor", "cordova", "angular"],
        tags: &["mobile", "hybrid"],
    },
    LanguageProfile {
        name: "Three.js",
        aliases: &["threejs"],
        weights: &[(Frontend, 0.68)],
        ecosystem: &["webgl", "shaders", "3d"],
        tags: &["graphics", "web"],
    },
    LanguageProfile {
        name: "D3.js",
        aliases: &["d3js", "d3"],
        weights: &[(Frontend, 0.62), (AiMl, 0.2)],
        ecosystem: &["svg", "data-visualization", "charts"],
        tags: &["visualization", "web"],
    },
    LanguageProfile {
        name: "Storybook",
        aliases: &["storybookjs"],
        weights: &[(Frontend, 0.6)],
        ecosystem: &["components", "design-system"],
        tags: &["tooling", "ui"],
    },
    // ------------------------------------------------------------------
    // Backend frameworks and runtimes
    // ------------------------------------------------------------------
    LanguageProfile {
        name: "Node.js",
        aliases: &["nodejs", "node"],
        weights: &[(Backend, 0.68), (Frontend, 0.2)],
        ecosystem: &["npm", "express", "event-loop", "v8"],
        tags: &["runtime", "javascript"],
    },
    LanguageProfile {
        name: "Deno",
        aliases: &["denoland"],
        weights: &[(Backend, 0.6)],
        ecosystem: &["typescript", "fresh"],
        tags: &["runtime", "secure"],
    },
    LanguageProfile {
        name: "Bun",
        aliases: &["bunjs"],
        weights: &[(Backend, 0.55), (Frontend, 0.2)],
        ecosystem: &["elysia", "zig"],
        tags: &["runtime", "fast"],
    },
    LanguageProfile {
        name: "Express",
        aliases: &["expressjs", "express.js"],
        weights: &[(Backend, 0.7)],
        ecosystem: &["middleware", "node", "rest-api"],
        tags: &["web", "api"],
    },
    LanguageProfile {
        name: "NestJS",
        aliases: &["nest", "nestjs-app"],
        weights: &[(Backend, 0.7)],
        ecosystem: &["typescript", "decorators", "microservices"],
        tags: &["web", "api", "enterprise"],
    },
    LanguageProfile {
        name: "Fastify",
        aliases: &["fastifyjs"],
        weights: &[(Backend, 0.66)],
        ecosystem: &["node", "plugins", "schema"],
        tags: &["web", "api", "performance"],
    },
    LanguageProfile {
        name: "Django",
        aliases: &["django-rest-framework", "drf"],
        weights: &[(Backend, 0.74)],
        ecosystem: &["python", "orm", "admin", "celery"],
        tags: &["web", "batteries-included"],
    },
    LanguageProfile {
        name: "Flask",
        aliases: &["flask-app"],
        weights: &[(Backend, 0.7)],
        ecosystem: &["python", "jinja2", "werkzeug", "blueprints"],
        tags: &["web", "microframework"],
    },
    LanguageProfile {
        name: "FastAPI",
        aliases: &["fast-api"],
        weights: &[(Backend, 0.72)],
        ecosystem: &["python", "pydantic", "uvicorn", "openapi"],
        tags: &["web", "api", "async"],
    },
    LanguageProfile {
        name: "Rails",
        aliases: &["ruby-on-rails", "ror"],
        weights: &[(Backend, 0.74)],
        ecosystem: &["activerecord", "sidekiq", "hotwire"],
        tags: &["web", "convention"],
    },
    LanguageProfile {
        name: "Laravel",
        aliases: &["laravel-app"],
        weights: &[(Backend, 0.72)],
        ecosystem: &["php", "eloquent", "artisan", "blade"],
        tags: &["web", "batteries-included"],
    },
    LanguageProfile {
        name: "Spring",
        aliases: &["spring-boot", "springframework"],
        weights: &[(Backend, 0.74)],
        ecosystem: &["java", "hibernate", "microservices", "maven"],
        tags: &["enterprise", "web"],
    },
    LanguageProfile {
        name: "ASP.NET",
        aliases: &["aspnet", "aspnetcore", "asp.net-core"],
        weights: &[(Backend, 0.7)],
        ecosystem: &["dotnet", "csharp", "blazor", "entity-framework"],
        tags: &["enterprise", "web", "microsoft"],
    },
    LanguageProfile {
        name: "Phoenix",
        aliases: &["phoenix-framework"],
        weights: &[(Backend, 0.68)],
        ecosystem: &["elixir", "liveview", "ecto", "channels"],
        tags: &["web", "realtime"],
    },
    LanguageProfile {
        name: "Actix",
        aliases: &["actix-web"],
        weights: &[(Backend, 0.68)],
        ecosystem: &["rust", "tokio"],
        tags: &["web", "performance"],
    },
    LanguageProfile {
        name: "Axum",
        aliases: &["axum-web"],
        weights: &[(Backend, 0.68)],
        ecosystem: &["rust", "tokio", "tower"],
        tags: &["web", "async"],
    },
    LanguageProfile {
        name: "Rocket",
        aliases: &["rocket-rs"],
        weights: &[(Backend, 0.64)],
        ecosystem: &["rust"],
        tags: &["web"],
    },
    LanguageProfile {
        name: "Gin",
        aliases: &["gin-gonic"],
        weights: &[(Backend, 0.66)],
        ecosystem: &["golang", "middleware"],
        tags: &["web", "api"],
    },
    LanguageProfile {
        name: "Fiber",
        aliases: &["gofiber"],
        weights: &[(Backend, 0.62)],
        ecosystem: &["golang", "fasthttp"],
        tags: &["web", "api"],
    },
    LanguageProfile {
        name: "gRPC",
        aliases: &["grpc-web", "protobuf-rpc"],
        weights: &[(Backend, 0.58), (Infrastructure, 0.25)],
        ecosystem: &["protobuf", "microservices", "streaming"],
        tags: &["rpc", "api"],
    },
    LanguageProfile {
        name: "Sinatra",
        aliases: &["sinatra-app"],
        weights: &[(Backend, 0.58)],
        ecosystem: &["ruby", "rack"],
        tags: &["web", "microframework"],
    },
    LanguageProfile {
        name: "Symfony",
        aliases: &["symfony-app"],
        weights: &[(Backend, 0.66)],
        ecosystem: &["php", "doctrine", "twig"],
        tags: &["web", "enterprise"],
    },
    LanguageProfile {
        name: "Quarkus",
        aliases: &["quarkus-app"],
        weights: &[(Backend, 0.62)],
        ecosystem: &["java", "graalvm", "native-image"],
        tags: &["cloud-native", "jvm"],
    },
    LanguageProfile {
        name: "Tokio",
        aliases: &["tokio-rs"],
        weights: &[(Backend, 0.6), (Infrastructure, 0.2)],
        ecosystem: &["rust", "async", "futures"],
        tags: &["runtime", "async"],
    },
    // ------------------------------------------------------------------
    // Databases and data stores
    // ------------------------------------------------------------------
    LanguageProfile {
        name: "PostgreSQL",
        aliases: &["postgres", "psql", "pg"],
        weights: &[(Database, 0.78)],
        ecosystem: &["plpgsql", "postgis", "pgbouncer", "migrations"],
        tags: &["relational", "sql"],
    },
    LanguageProfile {
        name: "MySQL",
        aliases: &["mysql8"],
        weights: &[(Database, 0.74)],
        ecosystem: &["innodb", "replication"],
        tags: &["relational", "sql"],
    },
    LanguageProfile {
        name: "MariaDB",
        aliases: &["maria-db"],
        weights: &[(Database, 0.68)],
        ecosystem: &["galera", "mysql"],
        tags: &["relational", "sql"],
    },
    LanguageProfile {
        name: "SQLite",
        aliases: &["sqlite3"],
        weights: &[(Database, 0.7)],
        ecosystem: &["embedded-db", "wal"],
        tags: &["embedded", "sql"],
    },
    LanguageProfile {
        name: "MongoDB",
        aliases: &["mongo", "mongod"],
        weights: &[(Database, 0.74)],
        ecosystem: &["mongoose", "aggregation", "atlas"],
        tags: &["nosql", "document"],
    },
    LanguageProfile {
        name: "Redis",
        aliases: &["redis-server", "valkey"],
        weights: &[(Database, 0.66), (Infrastructure, 0.25)],
        ecosystem: &["caching", "pubsub", "lua-scripts"],
        tags: &["cache", "in-memory"],
    },
    LanguageProfile {
        name: "Cassandra",
        aliases: &["apache-cassandra", "cql"],
        weights: &[(Database, 0.68)],
        ecosystem: &["scylladb", "wide-column"],
        tags: &["nosql", "distributed"],
    },
    LanguageProfile {
        name: "Elasticsearch",
        aliases: &["elastic", "opensearch"],
        weights: &[(Database, 0.6), (Infrastructure, 0.25)],
        ecosystem: &["kibana", "logstash", "full-text-search"],
        tags: &["search", "analytics"],
    },
    LanguageProfile {
        name: "DynamoDB",
        aliases: &["dynamo"],
        weights: &[(Database, 0.64), (Infrastructure, 0.2)],
        ecosystem: &["aws", "single-table"],
        tags: &["nosql", "managed"],
    },
    LanguageProfile {
        name: "Neo4j",
        aliases: &["cypher"],
        weights: &[(Database, 0.66)],
        ecosystem: &["graph-db", "knowledge-graph"],
        tags: &["graph", "nosql"],
    },
    LanguageProfile {
        name: "CouchDB",
        aliases: &["pouchdb"],
        weights: &[(Database, 0.6)],
        ecosystem: &["mapreduce", "replication"],
        tags: &["nosql", "document"],
    },
    LanguageProfile {
        name: "InfluxDB",
        aliases: &["influx"],
        weights: &[(Database, 0.62)],
        ecosystem: &["time-series", "telegraf", "flux-query"],
        tags: &["time-series", "metrics"],
    },
    LanguageProfile {
        name: "ClickHouse",
        aliases: &["clickhouse-server"],
        weights: &[(Database, 0.64)],
        ecosystem: &["olap", "columnar"],
        tags: &["analytics", "columnar"],
    },
    LanguageProfile {
        name: "DuckDB",
        aliases: &["duck-db"],
        weights: &[(Database, 0.6), (AiMl, 0.2)],
        ecosystem: &["olap", "parquet", "embedded-db"],
        tags: &["analytics", "embedded"],
    },
    LanguageProfile {
        name: "Supabase",
        aliases: &["supabase-js"],
        weights: &[(Database, 0.5), (Backend, 0.35)],
        ecosystem: &["postgres", "auth", "realtime"],
        tags: &["baas", "managed"],
    },
    LanguageProfile {
        name: "Firebase",
        aliases: &["firestore", "firebase-admin"],
        weights: &[(Database, 0.46), (Backend, 0.35)],
        ecosystem: &["gcp", "auth", "realtime", "cloud-functions"],
        tags: &["baas", "managed", "mobile"],
    },
    LanguageProfile {
        name: "Prisma",
        aliases: &["prisma-orm"],
        weights: &[(Database, 0.56), (Backend, 0.3)],
        ecosystem: &["typescript", "migrations", "schema"],
        tags: &["orm", "tooling"],
    },
    LanguageProfile {
        name: "SQLAlchemy",
        aliases: &["sqlalchemy-orm"],
        weights: &[(Database, 0.54), (Backend, 0.3)],
        ecosystem: &["python", "alembic", "sessions"],
        tags: &["orm", "tooling"],
    },
    LanguageProfile {
        name: "Snowflake",
        aliases: &["snowflake-db"],
        weights: &[(Database, 0.6), (AiMl, 0.2)],
        ecosystem: &["warehouse", "dbt"],
        tags: &["warehouse", "cloud"],
    },
    LanguageProfile {
        name: "BigQuery",
        aliases: &["big-query"],
        weights: &[(Database, 0.58), (AiMl, 0.25)],
        ecosystem: &["gcp", "warehouse", "sql"],
        tags: &["warehouse", "cloud"],
    },
    // ------------------------------------------------------------------
    // Messaging and streaming
    // ------------------------------------------------------------------
    LanguageProfile {
        name: "Kafka",
        aliases: &["apache-kafka"],
        weights: &[(Infrastructure, 0.55), (Backend, 0.3)],
        ecosystem: &["streaming", "consumer-groups", "connect", "zookeeper"],
        tags: &["messaging", "distributed"],
    },
    LanguageProfile {
        name: "RabbitMQ",
        aliases: &["rabbit", "amqp"],
        weights: &[(Infrastructure, 0.5), (Backend, 0.3)],
        ecosystem: &["queues", "exchanges"],
        tags: &["messaging"],
    },
    LanguageProfile {
        name: "NATS",
        aliases: &["nats-io"],
        weights: &[(Infrastructure, 0.48), (Backend, 0.28)],
        ecosystem: &["jetstream", "pubsub"],
        tags: &["messaging", "lightweight"],
    },
    // ------------------------------------------------------------------
    // Infrastructure, cloud, and platforms
    // ------------------------------------------------------------------
    LanguageProfile {
        name: "Docker",
        aliases: &["dockerfile", "docker-compose"],
        weights: &[(Infrastructure, 0.64), (DevOps, 0.4)],
        ecosystem: &["containers", "images", "registry", "compose"],
        tags: &["containers", "packaging"],
    },
    LanguageProfile {
        name: "Kubernetes",
        aliases: &["k8s", "kube"],
        weights: &[(Infrastructure, 0.72), (DevOps, 0.38)],
        ecosystem: &["helm", "kubectl", "operators", "pods", "ingress"],
        tags: &["orchestration", "cloud-native"],
    },
    LanguageProfile {
        name: "Helm",
        aliases: &["helm-charts"],
        weights: &[(Infrastructure, 0.58), (DevOps, 0.35)],
        ecosystem: &["kubernetes", "charts", "values"],
        tags: &["packaging", "cloud-native"],
    },
    LanguageProfile {
        name: "Terraform",
        aliases: &["tf", "hcl", "opentofu"],
        weights: &[(Infrastructure, 0.68), (DevOps, 0.4)],
        ecosystem: &["providers", "modules", "state", "plan"],
        tags: &["iac", "provisioning"],
    },
    LanguageProfile {
        name: "Pulumi",
        aliases: &["pulumi-iac"],
        weights: &[(Infrastructure, 0.6), (DevOps, 0.32)],
        ecosystem: &["iac", "typescript", "stacks"],
        tags: &["iac", "provisioning"],
    },
    LanguageProfile {
        name: "Ansible",
        aliases: &["ansible-playbook"],
        weights: &[(Infrastructure, 0.55), (DevOps, 0.45)],
        ecosystem: &["playbooks", "roles", "inventory", "yaml"],
        tags: &["configuration-management", "automation"],
    },
    LanguageProfile {
        name: "AWS",
        aliases: &["amazon-web-services", "aws-cli"],
        weights: &[(Infrastructure, 0.66), (DevOps, 0.3)],
        ecosystem: &["ec2", "s3", "lambda", "iam", "cloudformation", "eks"],
        tags: &["cloud", "managed"],
    },
    LanguageProfile {
        name: "Azure",
        aliases: &["microsoft-azure", "az"],
        weights: &[(Infrastructure, 0.62), (DevOps, 0.3)],
        ecosystem: &["aks", "functions", "arm-templates", "bicep"],
        tags: &["cloud", "microsoft"],
    },
    LanguageProfile {
        name: "Google Cloud",
        aliases: &["gcp", "google-cloud-platform", "gcloud"],
        weights: &[(Infrastructure, 0.62), (DevOps, 0.28)],
        ecosystem: &["gke", "cloud-run", "bigquery", "pubsub"],
        tags: &["cloud", "managed"],
    },
    LanguageProfile {
        name: "Cloudflare",
        aliases: &["cloudflare-workers", "wrangler"],
        weights: &[(Infrastructure, 0.56), (Backend, 0.25)],
        ecosystem: &["workers", "edge", "cdn", "r2"],
        tags: &["edge", "cdn"],
    },
    LanguageProfile {
        name: "Vercel",
        aliases: &["vercel-deploy"],
        weights: &[(Infrastructure, 0.42), (Frontend, 0.3), (DevOps, 0.25)],
        ecosystem: &["nextjs", "edge-functions", "preview-deploys"],
        tags: &["hosting", "serverless"],
    },
    LanguageProfile {
        name: "Netlify",
        aliases: &["netlify-deploy"],
        weights: &[(Infrastructure, 0.4), (Frontend, 0.3), (DevOps, 0.22)],
        ecosystem: &["jamstack", "functions", "edge"],
        tags: &["hosting", "static-site"],
    },
    LanguageProfile {
        name: "Heroku",
        aliases: &["heroku-app"],
        weights: &[(Infrastructure, 0.45), (DevOps, 0.28)],
        ecosystem: &["dynos", "buildpacks", "procfile"],
        tags: &["hosting", "paas"],
    },
    LanguageProfile {
        name: "Nginx",
        aliases: &["nginx-conf", "openresty"],
        weights: &[(Infrastructure, 0.6)],
        ecosystem: &["reverse-proxy", "load-balancing", "tls"],
        tags: &["web-server", "proxy"],
    },
    LanguageProfile {
        name: "Linux",
        aliases: &["gnu-linux", "debian", "ubuntu", "archlinux"],
        weights: &[(Infrastructure, 0.6), (DevOps, 0.25)],
        ecosystem: &["systemd", "kernel", "apt", "selinux"],
        tags: &["os", "unix"],
    },
    LanguageProfile {
        name: "Serverless",
        aliases: &["serverless-framework", "faas"],
        weights: &[(Infrastructure, 0.5), (Backend, 0.3)],
        ecosystem: &["lambda", "functions", "api-gateway"],
        tags: &["cloud", "architecture"],
    },
    LanguageProfile {
        name: "Istio",
        aliases: &["service-mesh"],
        weights: &[(Infrastructure, 0.58)],
        ecosystem: &["envoy", "kubernetes", "mtls"],
        tags: &["mesh", "cloud-native"],
    },
    LanguageProfile {
        name: "Vault",
        aliases: &["hashicorp-vault"],
        weights: &[(Infrastructure, 0.55), (DevOps, 0.25)],
        ecosystem: &["secrets", "pki", "consul"],
        tags: &["secrets", "security"],
    },
    LanguageProfile {
        name: "Consul",
        aliases: &["hashicorp-consul"],
        weights: &[(Infrastructure, 0.52)],
        ecosystem: &["service-discovery", "kv-store"],
        tags: &["networking", "cloud-native"],
    },
    // ------------------------------------------------------------------
    // DevOps, CI/CD, and observability
    // ------------------------------------------------------------------
    LanguageProfile {
        name: "Jenkins",
        aliases: &["jenkinsfile", "jenkins-pipeline"],
        weights: &[(DevOps, 0.66)],
        ecosystem: &["pipelines", "groovy", "agents"],
        tags: &["ci-cd", "automation"],
    },
    LanguageProfile {
        name: "GitHub Actions",
        aliases: &["github-actions", "gha", "actions-workflow"],
        weights: &[(DevOps, 0.66)],
        ecosystem: &["workflows", "runners", "yaml"],
        tags: &["ci-cd", "automation"],
    },
    LanguageProfile {
        name: "GitLab CI",
        aliases: &["gitlab-ci", "gitlab-pipelines"],
        weights: &[(DevOps, 0.62)],
        ecosystem: &["runners", "stages", "yaml"],
        tags: &["ci-cd", "automation"],
    },
    LanguageProfile {
        name: "CircleCI",
        aliases: &["circle-ci"],
        weights: &[(DevOps, 0.58)],
        ecosystem: &["orbs", "workflows"],
        tags: &["ci-cd"],
    },
    LanguageProfile {
        name: "ArgoCD",
        aliases: &["argo-cd", "argo"],
        weights: &[(DevOps, 0.58), (Infrastructure, 0.3)],
        ecosystem: &["gitops", "kubernetes", "sync"],
        tags: &["gitops", "cd"],
    },
    LanguageProfile {
        name: "Prometheus",
        aliases: &["promql"],
        weights: &[(DevOps, 0.58), (Infrastructure, 0.32)],
        ecosystem: &["metrics", "alertmanager", "exporters", "grafana"],
        tags: &["monitoring", "observability"],
    },
    LanguageProfile {
        name: "Grafana",
        aliases: &["grafana-dashboards"],
        weights: &[(DevOps, 0.56)],
        ecosystem: &["dashboards", "loki", "tempo", "prometheus"],
        tags: &["monitoring", "visualization"],
    },
    LanguageProfile {
        name: "OpenTelemetry",
        aliases: &["otel"],
        weights: &[(DevOps, 0.54), (Backend, 0.2)],
        ecosystem: &["traces", "spans", "collectors"],
        tags: &["observability", "tracing"],
    },
    LanguageProfile {
        name: "Git",
        aliases: &["git-scm"],
        weights: &[(DevOps, 0.5)],
        ecosystem: &["branches", "merge", "rebase", "hooks"],
        tags: &["version-control", "tooling"],
    },
    LanguageProfile {
        name: "Make",
        aliases: &["makefile", "gnu-make"],
        weights: &[(DevOps, 0.46), (Infrastructure, 0.2)],
        ecosystem: &["targets", "build"],
        tags: &["build", "tooling"],
    },
    LanguageProfile {
        name: "CMake",
        aliases: &["cmakelists"],
        weights: &[(DevOps, 0.44), (Infrastructure, 0.25)],
        ecosystem: &["cpp", "build", "ninja"],
        tags: &["build", "tooling"],
    },
    LanguageProfile {
        name: "Gradle",
        aliases: &["gradle-build"],
        weights: &[(DevOps, 0.48)],
        ecosystem: &["jvm", "kotlin-dsl", "build"],
        tags: &["build", "jvm"],
    },
    LanguageProfile {
        name: "Maven",
        aliases: &["mvn", "pom"],
        weights: &[(DevOps, 0.46)],
        ecosystem: &["jvm", "pom-xml", "build"],
        tags: &["build", "jvm"],
    },
    LanguageProfile {
        name: "Puppet",
        aliases: &["puppet-module"],
        weights: &[(DevOps, 0.5), (Infrastructure, 0.3)],
        ecosystem: &["manifests", "hiera"],
        tags: &["configuration-management"],
    },
    LanguageProfile {
        name: "Chef",
        aliases: &["chef-cookbook"],
        weights: &[(DevOps, 0.48), (Infrastructure, 0.28)],
        ecosystem: &["cookbooks", "recipes", "ruby"],
        tags: &["configuration-management"],
    },
    LanguageProfile {
        name: "Bazel",
        aliases: &["bazel-build", "starlark"],
        weights: &[(DevOps, 0.5)],
        ecosystem: &["monorepo", "hermetic-builds"],
        tags: &["build", "scale"],
    },
    // ------------------------------------------------------------------
    // AI, ML, and data engineering
    // ------------------------------------------------------------------
    LanguageProfile {
        name: "TensorFlow",
        aliases: &["tf2", "tensorflowjs"],
        weights: &[(AiMl, 0.76)],
        ecosystem: &["keras", "tensorboard", "gpu", "saved-model"],
        tags: &["deep-learning", "ml"],
    },
    LanguageProfile {
        name: "PyTorch",
        aliases: &["torch", "pytorch-lightning"],
        weights: &[(AiMl, 0.78)],
        ecosystem: &["tensors", "cuda", "autograd", "torchvision"],
        tags: &["deep-learning", "ml"],
    },
    LanguageProfile {
        name: "Keras",
        aliases: &["keras3"],
        weights: &[(AiMl, 0.68)],
        ecosystem: &["tensorflow", "layers"],
        tags: &["deep-learning", "high-level"],
    },
    LanguageProfile {
        name: "scikit-learn",
        aliases: &["sklearn", "scikit"],
        weights: &[(AiMl, 0.72)],
        ecosystem: &["estimators", "pipelines", "cross-validation"],
        tags: &["ml", "classical"],
    },
    LanguageProfile {
        name: "Pandas",
        aliases: &["pandas-df"],
        weights: &[(AiMl, 0.6), (Database, 0.2)],
        ecosystem: &["dataframe", "numpy", "csv", "parquet"],
        tags: &["data-analysis", "python"],
    },
    LanguageProfile {
        name: "NumPy",
        aliases: &["np"],
        weights: &[(AiMl, 0.58)],
        ecosystem: &["ndarray", "vectorization", "scipy"],
        tags: &["numerical", "python"],
    },
    LanguageProfile {
        name: "Jupyter",
        aliases: &["jupyter-notebook", "ipynb", "jupyterlab"],
        weights: &[(AiMl, 0.62)],
        ecosystem: &["notebooks", "kernels", "colab"],
        tags: &["notebooks", "exploration"],
    },
    LanguageProfile {
        name: "OpenCV",
        aliases: &["cv2", "opencv-python"],
        weights: &[(AiMl, 0.64)],
        ecosystem: &["computer-vision", "image-processing"],
        tags: &["vision", "ml"],
    },
    LanguageProfile {
        name: "Hugging Face",
        aliases: &["huggingface", "transformers", "hf"],
        weights: &[(AiMl, 0.72)],
        ecosystem: &["models", "tokenizers", "datasets", "hub"],
        tags: &["nlp", "llm"],
    },
    LanguageProfile {
        name: "LangChain",
        aliases: &["langchainjs", "langgraph"],
        weights: &[(AiMl, 0.68), (Backend, 0.2)],
        ecosystem: &["llm", "agents", "rag", "embeddings"],
        tags: &["llm", "agents"],
    },
    LanguageProfile {
        name: "OpenAI",
        aliases: &["openai-api", "gpt", "chatgpt"],
        weights: &[(AiMl, 0.64), (Backend, 0.2)],
        ecosystem: &["llm", "completions", "embeddings", "assistants"],
        tags: &["llm", "api"],
    },
    LanguageProfile {
        name: "Spark",
        aliases: &["apache-spark", "pyspark"],
        weights: &[(AiMl, 0.52), (Database, 0.3)],
        ecosystem: &["rdd", "dataframes", "mllib", "scala"],
        tags: &["big-data", "distributed"],
    },
    LanguageProfile {
        name: "Hadoop",
        aliases: &["hdfs", "mapreduce"],
        weights: &[(AiMl, 0.38), (Infrastructure, 0.35)],
        ecosystem: &["yarn", "hive"],
        tags: &["big-data", "legacy"],
    },
    LanguageProfile {
        name: "Airflow",
        aliases: &["apache-airflow"],
        weights: &[(AiMl, 0.42), (DevOps, 0.38)],
        ecosystem: &["dags", "operators", "scheduling"],
        tags: &["orchestration", "data-pipelines"],
    },
    LanguageProfile {
        name: "dbt",
        aliases: &["dbt-core"],
        weights: &[(Database, 0.5), (AiMl, 0.3)],
        ecosystem: &["sql", "models", "warehouse"],
        tags: &["analytics-engineering", "transform"],
    },
    LanguageProfile {
        name: "MLflow",
        aliases: &["ml-flow"],
        weights: &[(AiMl, 0.58), (DevOps, 0.25)],
        ecosystem: &["experiments", "model-registry"],
        tags: &["mlops", "tracking"],
    },
    LanguageProfile {
        name: "CUDA",
        aliases: &["nvcc", "gpgpu"],
        weights: &[(AiMl, 0.55), (Infrastructure, 0.3)],
        ecosystem: &["gpu", "kernels", "nvidia"],
        tags: &["gpu", "performance"],
    },
    LanguageProfile {
        name: "ONNX",
        aliases: &["onnxruntime"],
        weights: &[(AiMl, 0.58)],
        ecosystem: &["inference", "model-export"],
        tags: &["ml", "interop"],
    },
    LanguageProfile {
        name: "XGBoost",
        aliases: &["xgb", "lightgbm"],
        weights: &[(AiMl, 0.62)],
        ecosystem: &["gradient-boosting", "tabular"],
        tags: &["ml", "classical"],
    },
    LanguageProfile {
        name: "Ray",
        aliases: &["ray-serve", "ray-tune"],
        weights: &[(AiMl, 0.52), (Infrastructure, 0.25)],
        ecosystem: &["distributed", "actors"],
        tags: &["distributed", "ml"],
    },
    LanguageProfile {
        name: "Streamlit",
        aliases: &["streamlit-app"],
        weights: &[(AiMl, 0.5), (Frontend, 0.25)],
        ecosystem: &["python", "dashboards", "widgets"],
        tags: &["data-apps", "prototyping"],
    },
    LanguageProfile {
        name: "spaCy",
        aliases: &["spacy-nlp"],
        weights: &[(AiMl, 0.6)],
        ecosystem: &["nlp", "ner", "pipelines"],
        tags: &["nlp", "python"],
    },
    LanguageProfile {
        name: "NLTK",
        aliases: &["nltk-data"],
        weights: &[(AiMl, 0.54)],
        ecosystem: &["nlp", "corpora", "tokenization"],
        tags: &["nlp", "academic"],
    },
    LanguageProfile {
        name: "Stable Diffusion",
        aliases: &["stable-diffusion-webui", "sdxl"],
        weights: &[(AiMl, 0.6)],
        ecosystem: &["diffusers", "img2img", "lora"],
        tags: &["generative", "images"],
    },
];

/// Lookup index over [`PROFILES`], keyed by lowercased canonical names,
/// aliases, and a squashed alphanumeric form ("next.js" → "nextjs").
static INDEX: Lazy<HashMap<String, &'static LanguageProfile>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for profile in PROFILES {
        insert_key(&mut index, profile.name, profile);
        for alias in profile.aliases {
            insert_key(&mut index, alias, profile);
        }
    }
    index
});

fn insert_key(
    index: &mut HashMap<String, &'static LanguageProfile>,
    key: &str,
    profile: &'static LanguageProfile,
) {
    let lower = key.to_ascii_lowercase();
    let squashed: String = lower.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    // Canonical names take precedence over another profile's alias.
    index.entry(lower).or_insert(profile);
    if !squashed.is_empty() {
        index.entry(squashed).or_insert(profile);
    }
}

/// All registered profiles.
#[must_use]
pub fn profiles() -> &'static [LanguageProfile] {
    PROFILES
}

/// Resolve a name or alias to its profile, case-insensitively.
///
/// Separator and punctuation differences are tolerated: "Next.js",
/// "nextjs", and "NEXT-JS" all resolve to the same profile.
#[must_use]
pub fn find_profile(name: &str) -> Option<&'static LanguageProfile> {
    let lower = name.trim().to_ascii_lowercase();
    if lower.is_empty() {
        return None;
    }
    if let Some(profile) = INDEX.get(&lower) {
        return Some(*profile);
    }
    let squashed: String = lower.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if squashed.is_empty() {
        return None;
    }
    INDEX.get(&squashed).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::SkillCategory;

    #[test]
    fn test_registry_has_expected_breadth() {
        assert!(PROFILES.len() >= 140, "registry holds {} profiles", PROFILES.len());
    }

    #[test]
    fn test_lookup_by_canonical_name() {
        let profile = find_profile("Rust").unwrap();
        assert_eq!(profile.name, "Rust");
    }

    #[test]
    fn test_lookup_by_alias() {
        let profile = find_profile("k8s").unwrap();
        assert_eq!(profile.name, "Kubernetes");
    }

    #[test]
    fn test_lookup_tolerates_separators() {
        let dotted = find_profile("Next.js").unwrap();
        let squashed = find_profile("nextjs").unwrap();
        assert_eq!(dotted.name, squashed.name);
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert!(find_profile("definitely-not-a-language-xyz").is_none());
        assert!(find_profile("").is_none());
        assert!(find_profile("   ").is_none());
    }

    #[test]
    fn test_weights_are_in_range() {
        for profile in PROFILES {
            for (_, weight) in profile.weights {
                assert!(
                    (0.0..=1.0).contains(weight),
                    "{} carries out-of-range weight {weight}",
                    profile.name
                );
            }
            assert!(!profile.weights.is_empty(), "{} has no weights", profile.name);
        }
    }

    #[test]
    fn test_database_technologies_lean_database() {
        let profile = find_profile("postgres").unwrap();
        assert_eq!(profile.dominant_category(), Some(SkillCategory::Database));
    }
}
