//! Skill taxonomy — the fixed table of recognised skills, their surface forms,
//! and a category tag.
//!
//! Keywords are lowercase. A keyword containing a space is a phrase and counts
//! double during extraction; everything else (including "c++", "c#", ".net")
//! is a single token.
//!
//! Adding a skill means appending one `entry(...)` row. The pipeline picks it
//! up without changes.

use serde::{Deserialize, Serialize};

/// Classification tag carried through to output. Never used in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Language,
    Frontend,
    Backend,
    Database,
    Cloud,
    Devops,
    Ml,
    Data,
    Tools,
    Methodology,
    Testing,
    Security,
    Mobile,
    Architecture,
    Paradigm,
    #[serde(rename = "gamedev")]
    GameDev,
    Blockchain,
    Embedded,
    Fundamental,
}

/// One row of the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxonomyEntry {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub category: Category,
}

impl TaxonomyEntry {
    /// Phrases (keywords with an internal space) are weighted 2, tokens 1.
    pub fn is_phrase(keyword: &str) -> bool {
        keyword.contains(' ')
    }
}

const fn entry(
    name: &'static str,
    category: Category,
    keywords: &'static [&'static str],
) -> TaxonomyEntry {
    TaxonomyEntry {
        name,
        keywords,
        category,
    }
}

/// Returns every taxonomy entry in stable table order.
pub fn entries() -> &'static [TaxonomyEntry] {
    TAXONOMY
}

/// Case-insensitive lookup by canonical skill name.
pub fn find(name: &str) -> Option<&'static TaxonomyEntry> {
    let name = name.trim();
    TAXONOMY.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

static TAXONOMY: &[TaxonomyEntry] = &[
    // Languages
    entry("Python", Category::Language, &[
        "python", "py", "django", "flask", "fastapi", "pandas", "numpy", "scipy", "matplotlib",
        "jupyter", "pip", "conda", "anaconda", "pytorch", "tensorflow",
    ]),
    entry("JavaScript", Category::Language, &[
        "javascript", "js", "es6", "es2015", "ecmascript", "node", "nodejs", "npm", "yarn", "pnpm",
        "vanilla js",
    ]),
    entry("TypeScript", Category::Language, &[
        "typescript", "ts", "tsc", "typed javascript", "type-safe",
    ]),
    entry("Java", Category::Language, &[
        "java", "jvm", "jdk", "jre", "spring", "springboot", "maven", "gradle", "hibernate", "jdbc",
        "servlet", "jsp", "tomcat",
    ]),
    entry("C++", Category::Language, &[
        "c++", "cpp", "cplusplus", "stl", "boost", "qt", "cmake", "makefile",
    ]),
    entry("C", Category::Language, &[
        "c programming", "c language", "ansi c", "gcc", "clang", "pointer", "malloc",
    ]),
    entry("C#", Category::Language, &[
        "c#", "csharp", "c sharp", ".net", "dotnet", "asp.net", "unity", "xamarin", "blazor", "wpf",
        "winforms",
    ]),
    entry("Go", Category::Language, &[
        "go", "golang", "go lang", "go programming", "goroutine", "gopher",
    ]),
    entry("Rust", Category::Language, &[
        "rust", "rustlang", "cargo", "rustc", "ownership", "borrowing",
    ]),
    entry("Ruby", Category::Language, &[
        "ruby", "rails", "ruby on rails", "ror", "gem", "bundler", "sinatra",
    ]),
    entry("PHP", Category::Language, &[
        "php", "laravel", "symfony", "wordpress", "drupal", "composer", "artisan",
    ]),
    entry("Swift", Category::Language, &[
        "swift", "swiftui", "ios development", "xcode", "cocoa", "uikit",
    ]),
    entry("Kotlin", Category::Language, &[
        "kotlin", "android development", "jetpack", "coroutines",
    ]),
    entry("Scala", Category::Language, &["scala", "akka", "play framework", "sbt", "spark scala"]),
    entry("R", Category::Language, &[
        "r programming", "r language", "rstudio", "ggplot", "tidyverse", "dplyr", "cran",
    ]),
    entry("MATLAB", Category::Language, &["matlab", "simulink", "octave", "matrix laboratory"]),
    entry("Perl", Category::Language, &["perl", "cpan", "regex perl"]),
    entry("Haskell", Category::Language, &[
        "haskell", "ghc", "cabal", "functional programming", "monads",
    ]),
    entry("Elixir", Category::Language, &["elixir", "phoenix", "erlang", "beam", "otp"]),
    entry("Clojure", Category::Language, &["clojure", "clojurescript", "lisp", "leiningen"]),
    entry("Dart", Category::Language, &["dart", "flutter", "dartlang"]),
    entry("Lua", Category::Language, &["lua", "luajit", "love2d", "neovim lua"]),
    entry("Julia", Category::Language, &["julia", "julialang", "scientific computing"]),
    entry("Assembly", Category::Language, &[
        "assembly", "asm", "x86", "arm", "mips", "nasm", "low-level",
    ]),
    entry("Shell", Category::Language, &[
        "bash", "shell", "zsh", "sh", "powershell", "batch", "scripting", "terminal", "cli",
    ]),
    entry("SQL", Category::Language, &[
        "sql", "mysql", "postgresql", "postgres", "sqlite", "oracle", "mssql", "tsql", "plsql",
        "query", "database query",
    ]),

    // Frontend
    entry("React", Category::Frontend, &[
        "react", "reactjs", "react.js", "jsx", "hooks", "redux", "context api", "react native",
        "nextjs", "next.js", "gatsby", "remix",
    ]),
    entry("Vue.js", Category::Frontend, &[
        "vue", "vuejs", "vue.js", "vuex", "pinia", "nuxt", "nuxtjs", "composition api",
    ]),
    entry("Angular", Category::Frontend, &[
        "angular", "angularjs", "rxjs", "ngrx", "angular material",
    ]),
    entry("Svelte", Category::Frontend, &["svelte", "sveltekit", "svelte kit"]),
    entry("HTML", Category::Frontend, &[
        "html", "html5", "semantic html", "markup", "dom", "web page",
    ]),
    entry("CSS", Category::Frontend, &[
        "css", "css3", "flexbox", "grid", "responsive", "media queries", "animations",
        "transitions", "stylesheet",
    ]),
    entry("Sass", Category::Frontend, &["sass", "scss", "less", "stylus", "css preprocessor"]),
    entry("Tailwind CSS", Category::Frontend, &[
        "tailwind", "tailwindcss", "utility-first", "utility css",
    ]),
    entry("Bootstrap", Category::Frontend, &["bootstrap", "bootstrap5", "responsive framework"]),
    entry("Material UI", Category::Frontend, &[
        "material ui", "mui", "material design", "chakra ui", "ant design", "antd",
    ]),
    entry("jQuery", Category::Frontend, &["jquery", "ajax", "dom manipulation"]),
    entry("WebGL", Category::Frontend, &[
        "webgl", "three.js", "threejs", "webgpu", "3d graphics", "canvas", "pixi",
    ]),
    entry("D3.js", Category::Frontend, &[
        "d3", "d3.js", "data visualization", "svg charts", "interactive charts",
    ]),

    // Backend frameworks and APIs
    entry("Node.js", Category::Backend, &[
        "node", "nodejs", "node.js", "express", "expressjs", "koa", "fastify", "nestjs", "hapi",
    ]),
    entry("Django", Category::Backend, &["django", "drf", "django rest framework", "python web"]),
    entry("Flask", Category::Backend, &["flask", "werkzeug", "jinja", "flask api"]),
    entry("FastAPI", Category::Backend, &["fastapi", "starlette", "pydantic", "async python"]),
    entry("Spring Boot", Category::Backend, &[
        "spring", "springboot", "spring boot", "spring mvc", "spring security", "spring data",
    ]),
    entry("ASP.NET", Category::Backend, &[
        "asp.net", "aspnet", "asp.net core", "web api", "razor", "entity framework",
    ]),
    entry("Ruby on Rails", Category::Backend, &[
        "rails", "ruby on rails", "ror", "activerecord", "action cable",
    ]),
    entry("Laravel", Category::Backend, &[
        "laravel", "eloquent", "blade", "artisan", "php framework",
    ]),
    entry("GraphQL", Category::Backend, &[
        "graphql", "apollo", "relay", "hasura", "prisma graphql", "schema",
    ]),
    entry("REST API", Category::Backend, &[
        "rest", "restful", "api", "api design", "openapi", "swagger", "postman", "endpoints",
    ]),
    entry("gRPC", Category::Backend, &["grpc", "protobuf", "protocol buffers", "rpc"]),
    entry("WebSockets", Category::Backend, &[
        "websocket", "websockets", "socket.io", "real-time", "ws",
    ]),

    // Databases
    entry("PostgreSQL", Category::Database, &[
        "postgresql", "postgres", "psql", "pg", "relational database",
    ]),
    entry("MySQL", Category::Database, &["mysql", "mariadb", "percona"]),
    entry("MongoDB", Category::Database, &[
        "mongodb", "mongo", "mongoose", "nosql", "document database", "bson",
    ]),
    entry("Redis", Category::Database, &["redis", "cache", "in-memory", "key-value", "caching"]),
    entry("Elasticsearch", Category::Database, &[
        "elasticsearch", "elastic", "elk", "kibana", "logstash", "full-text search",
    ]),
    entry("Cassandra", Category::Database, &[
        "cassandra", "apache cassandra", "distributed database", "wide-column",
    ]),
    entry("DynamoDB", Category::Database, &["dynamodb", "dynamo", "aws database"]),
    entry("Firebase", Category::Database, &[
        "firebase", "firestore", "realtime database", "firebase auth",
    ]),
    entry("Neo4j", Category::Database, &["neo4j", "graph database", "cypher", "knowledge graph"]),
    entry("SQLite", Category::Database, &[
        "sqlite", "sqlite3", "embedded database", "local database",
    ]),
    entry("Oracle", Category::Database, &["oracle", "oracle db", "plsql", "oracle database"]),
    entry("SQL Server", Category::Database, &["sql server", "mssql", "tsql", "microsoft sql"]),

    // Cloud
    entry("AWS", Category::Cloud, &[
        "aws", "amazon web services", "ec2", "s3", "lambda", "cloudformation", "sqs", "sns", "rds",
        "ecs", "eks", "fargate", "cloudwatch", "iam", "vpc", "route53", "api gateway",
    ]),
    entry("Azure", Category::Cloud, &[
        "azure", "microsoft azure", "azure devops", "azure functions", "azure storage", "cosmos db",
        "aks",
    ]),
    entry("Google Cloud", Category::Cloud, &[
        "gcp", "google cloud", "bigquery", "cloud run", "gke", "cloud functions", "pub/sub",
        "dataflow",
    ]),
    entry("Docker", Category::Devops, &[
        "docker", "dockerfile", "container", "containerization", "docker-compose", "docker compose",
        "docker hub", "image", "container image",
    ]),
    entry("Kubernetes", Category::Devops, &[
        "kubernetes", "k8s", "kubectl", "helm", "pods", "deployment", "service mesh", "istio",
        "container orchestration",
    ]),
    entry("Terraform", Category::Devops, &[
        "terraform", "infrastructure as code", "iac", "hcl", "terragrunt", "tfstate",
    ]),
    entry("Ansible", Category::Devops, &[
        "ansible", "playbook", "configuration management", "automation",
    ]),
    entry("Jenkins", Category::Devops, &[
        "jenkins", "ci/cd", "pipeline", "continuous integration", "build automation",
    ]),
    entry("GitHub Actions", Category::Devops, &[
        "github actions", "workflows", "gh actions", "github ci",
    ]),
    entry("GitLab CI", Category::Devops, &[
        "gitlab ci", "gitlab", "gitlab pipeline", "gitlab runner",
    ]),
    entry("CI/CD", Category::Devops, &[
        "ci/cd", "cicd", "continuous integration", "continuous deployment", "continuous delivery",
        "devops pipeline",
    ]),
    entry("Linux", Category::Devops, &[
        "linux", "ubuntu", "debian", "centos", "fedora", "rhel", "unix", "sysadmin",
        "system administration",
    ]),
    entry("Nginx", Category::Devops, &["nginx", "reverse proxy", "load balancer", "web server"]),
    entry("Apache", Category::Devops, &["apache", "httpd", "apache server"]),
    entry("Monitoring", Category::Devops, &[
        "prometheus", "grafana", "datadog", "new relic", "monitoring", "observability", "metrics",
        "alerting",
    ]),

    // Machine learning
    entry("Machine Learning", Category::Ml, &[
        "machine learning", "ml", "supervised learning", "unsupervised learning", "regression",
        "classification", "clustering", "feature engineering",
    ]),
    entry("Deep Learning", Category::Ml, &[
        "deep learning", "neural network", "neural networks", "cnn", "rnn", "lstm", "transformer",
        "attention", "backpropagation",
    ]),
    entry("TensorFlow", Category::Ml, &["tensorflow", "tf", "keras", "tf.keras", "tensorboard"]),
    entry("PyTorch", Category::Ml, &["pytorch", "torch", "torchvision", "lightning"]),
    entry("Scikit-learn", Category::Ml, &[
        "scikit-learn", "sklearn", "scikit", "machine learning python",
    ]),
    entry("Natural Language Processing", Category::Ml, &[
        "nlp", "natural language", "text processing", "tokenization", "named entity", "ner",
        "sentiment analysis", "text classification", "spacy", "nltk", "huggingface", "transformers",
        "bert", "gpt", "llm", "large language model",
    ]),
    entry("Computer Vision", Category::Ml, &[
        "computer vision", "cv", "image processing", "object detection", "image classification",
        "opencv", "yolo", "image recognition", "face detection", "ocr",
    ]),
    entry("Data Science", Category::Ml, &[
        "data science", "data analysis", "data analytics", "exploratory data", "eda",
        "statistical analysis", "statistics",
    ]),
    entry("Pandas", Category::Ml, &["pandas", "dataframe", "data manipulation", "data wrangling"]),
    entry("NumPy", Category::Ml, &["numpy", "numerical computing", "arrays", "matrix operations"]),
    entry("MLOps", Category::Ml, &[
        "mlops", "ml pipeline", "model deployment", "mlflow", "kubeflow", "model serving",
    ]),
    entry("Reinforcement Learning", Category::Ml, &[
        "reinforcement learning", "rl", "q-learning", "policy gradient", "gym", "agent",
    ]),

    // Data engineering
    entry("Apache Spark", Category::Data, &[
        "spark", "pyspark", "spark sql", "databricks", "distributed computing",
    ]),
    entry("Apache Kafka", Category::Data, &[
        "kafka", "event streaming", "message queue", "pub-sub", "kafka streams",
    ]),
    entry("Airflow", Category::Data, &[
        "airflow", "apache airflow", "dag", "workflow orchestration", "etl",
    ]),
    entry("ETL", Category::Data, &[
        "etl", "data pipeline", "data ingestion", "data transformation", "data loading",
    ]),
    entry("Data Warehousing", Category::Data, &[
        "data warehouse", "dwh", "snowflake", "redshift", "bigquery", "olap",
        "dimensional modeling",
    ]),
    entry("Hadoop", Category::Data, &["hadoop", "hdfs", "mapreduce", "hive", "pig", "yarn"]),
    entry("dbt", Category::Data, &[
        "dbt", "data build tool", "analytics engineering", "data modeling",
    ]),

    // Collaboration
    entry("Git", Category::Tools, &[
        "git", "version control", "github", "gitlab", "bitbucket", "commit", "branch", "merge",
        "pull request", "pr", "repository", "repo", "gitflow",
    ]),
    entry("Agile", Category::Methodology, &[
        "agile", "scrum", "kanban", "sprint", "user story", "backlog", "standup", "retrospective",
        "jira", "trello",
    ]),

    // Testing
    entry("Unit Testing", Category::Testing, &[
        "unit test", "unit testing", "jest", "mocha", "chai", "pytest", "junit", "xunit", "nunit",
        "test driven", "tdd",
    ]),
    entry("Integration Testing", Category::Testing, &[
        "integration test", "integration testing", "api testing", "end-to-end", "e2e", "cypress",
        "playwright", "selenium", "webdriver",
    ]),
    entry("Test Automation", Category::Testing, &[
        "test automation", "automated testing", "qa automation", "testing framework",
    ]),

    // Security
    entry("Cybersecurity", Category::Security, &[
        "security", "cybersecurity", "infosec", "penetration testing", "pentest", "vulnerability",
        "owasp", "security audit",
    ]),
    entry("Authentication", Category::Security, &[
        "authentication", "authorization", "oauth", "oauth2", "jwt", "saml", "sso", "identity",
        "auth0", "keycloak",
    ]),
    entry("Cryptography", Category::Security, &[
        "cryptography", "encryption", "hashing", "ssl", "tls", "https", "certificates", "pki",
    ]),

    // Mobile
    entry("iOS Development", Category::Mobile, &[
        "ios", "iphone", "ipad", "swiftui", "uikit", "core data", "app store",
    ]),
    entry("Android Development", Category::Mobile, &[
        "android", "android studio", "kotlin android", "java android", "play store",
        "jetpack compose",
    ]),
    entry("React Native", Category::Mobile, &["react native", "expo", "cross-platform mobile"]),
    entry("Flutter", Category::Mobile, &["flutter", "dart mobile", "cross-platform"]),

    // Architecture
    entry("System Design", Category::Architecture, &[
        "system design", "architecture", "scalability", "high availability", "distributed systems",
        "microservices", "monolith", "soa",
    ]),
    entry("Microservices", Category::Architecture, &[
        "microservices", "micro services", "service oriented", "api gateway", "service mesh",
    ]),
    entry("Design Patterns", Category::Architecture, &[
        "design patterns", "solid", "dry", "kiss", "factory", "singleton", "observer", "mvc",
        "mvvm", "clean architecture",
    ]),
    entry("Object-Oriented Programming", Category::Paradigm, &[
        "oop", "object oriented", "object-oriented", "inheritance", "polymorphism", "encapsulation",
        "abstraction", "class", "interface",
    ]),
    entry("Functional Programming", Category::Paradigm, &[
        "functional programming", "fp", "immutability", "pure functions", "higher-order functions",
        "lambda", "map reduce filter",
    ]),

    // Games
    entry("Game Development", Category::GameDev, &[
        "game development", "game dev", "gamedev", "unity", "unreal", "godot", "game engine",
    ]),
    entry("Unity", Category::GameDev, &["unity", "unity3d", "c# game", "game engine unity"]),
    entry("Unreal Engine", Category::GameDev, &[
        "unreal", "unreal engine", "ue4", "ue5", "blueprint",
    ]),

    // Blockchain
    entry("Blockchain", Category::Blockchain, &[
        "blockchain", "cryptocurrency", "crypto", "web3", "decentralized", "dapp", "smart contract",
    ]),
    entry("Solidity", Category::Blockchain, &[
        "solidity", "ethereum", "smart contracts", "evm", "hardhat", "truffle",
    ]),

    // Embedded
    entry("Embedded Systems", Category::Embedded, &[
        "embedded", "embedded systems", "firmware", "rtos", "microcontroller", "arduino",
        "raspberry pi", "esp32", "stm32",
    ]),
    entry("IoT", Category::Embedded, &[
        "iot", "internet of things", "mqtt", "sensors", "actuators", "edge computing",
    ]),

    // Fundamentals
    entry("Problem Solving", Category::Fundamental, &[
        "problem solving", "algorithms", "data structures", "leetcode", "competitive programming",
        "optimization",
    ]),
    entry("Algorithms", Category::Fundamental, &[
        "algorithm", "algorithms", "sorting", "searching", "dynamic programming",
        "graph algorithms", "big o", "complexity",
    ]),
    entry("Data Structures", Category::Fundamental, &[
        "data structure", "data structures", "array", "linked list", "tree", "binary tree",
        "hash table", "stack", "queue", "heap", "graph",
    ]),
    entry("APIs", Category::Fundamental, &[
        "api", "api design", "api integration", "third-party api", "web services",
    ]),
    entry("Debugging", Category::Fundamental, &[
        "debugging", "troubleshooting", "bug fixing", "debugger", "breakpoint", "stack trace",
    ]),
    entry("Code Review", Category::Fundamental, &[
        "code review", "peer review", "code quality", "best practices", "clean code",
    ]),
    entry("Documentation", Category::Fundamental, &[
        "documentation", "technical writing", "readme", "api docs", "jsdoc", "docstring",
    ]),
    entry("Performance Optimization", Category::Fundamental, &[
        "performance", "optimization", "profiling", "bottleneck", "caching", "lazy loading",
        "code optimization",
    ]),

    // Frontend
    entry("Accessibility", Category::Frontend, &[
        "accessibility", "a11y", "wcag", "screen reader", "aria", "inclusive design",
    ]),
    entry("SEO", Category::Frontend, &[
        "seo", "search engine optimization", "meta tags", "structured data", "core web vitals",
    ]),
    entry("WebAssembly", Category::Frontend, &["webassembly", "wasm", "assemblyscript"]),
    entry("PWA", Category::Frontend, &[
        "pwa", "progressive web app", "service worker", "offline first", "manifest",
    ]),
];
