//! Static project-template catalog and the lookup tables that route skills
//! and research interests to catalog domains.

pub struct ProjectTemplate {
    /// May contain `{domain}` and `{framework}` placeholders.
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const DATA_SCIENCE: &str = "Data Science";
pub const AI_ML: &str = "AI/ML";
pub const WEB_DEVELOPMENT: &str = "Web Development";
pub const CYBERSECURITY: &str = "Cybersecurity";

pub const CATALOG: &[(&str, &[ProjectTemplate])] = &[
    (
        DATA_SCIENCE,
        &[
            ProjectTemplate {
                title: "Data Analysis Pipeline",
                description: "Build a data analysis pipeline for {domain} using Python. Implement data cleaning, visualization, and statistical analysis.",
                tags: &["Python", "Pandas", "NumPy", "Matplotlib"],
            },
            ProjectTemplate {
                title: "Big Data Processing System",
                description: "Create a big data processing system for {domain} using distributed computing frameworks.",
                tags: &["Python", "Spark", "Hadoop", "Data Engineering"],
            },
        ],
    ),
    (
        AI_ML,
        &[
            ProjectTemplate {
                title: "Machine Learning Model for {domain}",
                description: "Develop a machine learning model to solve {domain} problems using {framework}. Implement data preprocessing, model training, and evaluation pipeline.",
                tags: &["Python", "TensorFlow", "PyTorch", "scikit-learn"],
            },
            ProjectTemplate {
                title: "Natural Language Processing System",
                description: "Build an NLP system for {domain} using transformer models. Implement text preprocessing, model fine-tuning, and API integration.",
                tags: &["Python", "HuggingFace", "NLP", "Deep Learning"],
            },
        ],
    ),
    (
        WEB_DEVELOPMENT,
        &[
            ProjectTemplate {
                title: "Full-Stack {framework} Application",
                description: "Create a full-stack application using {framework} for {domain}. Implement responsive design, authentication, and real-time features.",
                tags: &["JavaScript", "React", "Node.js", "MongoDB"],
            },
            ProjectTemplate {
                title: "Progressive Web App",
                description: "Develop a PWA for {domain} with offline capabilities, push notifications, and responsive design.",
                tags: &["JavaScript", "React", "Service Workers", "PWA"],
            },
        ],
    ),
    (
        CYBERSECURITY,
        &[
            ProjectTemplate {
                title: "Security Analysis Tool",
                description: "Develop a security analysis tool for {domain} with vulnerability scanning and threat detection capabilities.",
                tags: &["Python", "Security", "Networking", "Cryptography"],
            },
            ProjectTemplate {
                title: "Secure Authentication System",
                description: "Build a secure authentication system with multi-factor authentication and encryption.",
                tags: &["JavaScript", "Security", "Authentication", "Cryptography"],
            },
        ],
    ),
];

/// Exact-name skill → domains.
pub const SKILL_DOMAINS: &[(&str, &[&str])] = &[
    ("Node.js", &[WEB_DEVELOPMENT]),
    ("TensorFlow", &[AI_ML]),
    ("PyTorch", &[AI_ML]),
    ("Pandas", &[DATA_SCIENCE]),
    ("Python", &[AI_ML, DATA_SCIENCE, CYBERSECURITY]),
    ("JavaScript", &[WEB_DEVELOPMENT, CYBERSECURITY]),
    ("React", &[WEB_DEVELOPMENT]),
    ("Machine Learning", &[AI_ML, DATA_SCIENCE]),
    ("Deep Learning", &[AI_ML]),
    ("NLP", &[AI_ML]),
    ("Data Analysis", &[DATA_SCIENCE]),
    ("Security", &[CYBERSECURITY]),
];

/// Exact-name research interest → domains.
pub const INTEREST_DOMAINS: &[(&str, &[&str])] = &[
    ("Artificial Intelligence", &[AI_ML]),
    ("Machine Learning", &[AI_ML]),
    ("Natural Language Processing", &[AI_ML]),
    ("Computer Vision", &[AI_ML]),
    ("Data Mining", &[DATA_SCIENCE]),
    ("Big Data", &[DATA_SCIENCE]),
    ("Web Development", &[WEB_DEVELOPMENT]),
    ("Cybersecurity", &[CYBERSECURITY]),
    ("Network Security", &[CYBERSECURITY]),
    ("Software Engineering", &[WEB_DEVELOPMENT]),
];

pub fn lookup_domains(table: &[(&str, &'static [&'static str])], key: &str) -> &'static [&'static str] {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, domains)| *domains)
        .unwrap_or(&[])
}

pub fn templates_for(domain: &str) -> &'static [ProjectTemplate] {
    CATALOG
        .iter()
        .find(|(name, _)| *name == domain)
        .map(|(_, templates)| *templates)
        .unwrap_or(&[])
}
