pub const OWNER_NAME: &str = "Soheb Khan";
pub const RECIPIENT_NAME: &str = "Soheb";
pub const TAGLINE: &str =
    "I bridge quality engineering and predictive analytics for robust solutions.";
pub const TYPEWRITER_PHRASES: &[&str] = &["Senior Automation Engineer", "Aspiring Data Scientist"];

pub const GITHUB_URL: &str = "https://github.com/sohebkh13";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/soheb-khan/";
pub const CONTACT_FALLBACK_URL: &str = LINKEDIN_URL;
pub const DESIGN_CREDIT_URL: &str = "https://brittanychiang.com/";

pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        icon: "GH",
        href: GITHUB_URL,
    },
    SocialLink {
        label: "LinkedIn",
        icon: "in",
        href: LINKEDIN_URL,
    },
];

/// Text that swaps to another language while hovered.
pub struct Bilingual {
    pub primary: &'static str,
    pub alternate: &'static str,
}

pub const HOBBY: Bilingual = Bilingual {
    primary: "learning Arabic",
    alternate: "تعلم اللغة العربية",
};

pub struct ResumeLink {
    pub label: Bilingual,
    pub href: &'static str,
}

pub const RESUMES: &[ResumeLink] = &[
    ResumeLink {
        label: Bilingual {
            primary: "View QA Résumé",
            alternate: "عرض السيرة الذاتية لضمان الجودة",
        },
        href: "https://drive.google.com/file/d/10mvznbnSkRxvUfLEC0KLHP_mTtBJKq5p/view?usp=sharing",
    },
    ResumeLink {
        label: Bilingual {
            primary: "View Data Science Résumé",
            alternate: "عرض السيرة الذاتية لعلوم البيانات",
        },
        href: "https://drive.google.com/file/d/1trRn7XQ7mDGJf3uU18NrYmjTBOEIKMo5/view?usp=sharing",
    },
];

pub struct AboutLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const CURRENT_EMPLOYER: AboutLink = AboutLink {
    label: "6D Technologies",
    href: "https://www.6dtechnologies.com/",
};

pub const PAST_EMPLOYERS: [AboutLink; 3] = [
    AboutLink {
        label: "telecom giants",
        href: "https://www.vodafone.co.uk/",
    },
    AboutLink {
        label: "analytics firms",
        href: "https://aivariant.com/",
    },
    AboutLink {
        label: "consulting companies",
        href: "https://www.technocolabs.com/",
    },
];

pub struct Experience {
    pub period: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub link: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        period: "2024 — PRESENT",
        title: "Senior Automation Engineer",
        company: "6D Technologies",
        link: "https://www.6dtechnologies.com/",
        description: "Built test automation frameworks using Robot Framework, Pytest, and Python for UI, API, and database validation. Automated scenarios across web and backend systems with Excel-driven data and MySQL integration. Performed API testing, security assessments with OWASP tools, and integrated test suites into CI/CD pipelines using Docker. Designed JMeter-based performance tests to evaluate system stability under load.",
        technologies: &[
            "Python",
            "Selenium",
            "Robot Framework",
            "Docker",
            "Git",
            "Postman",
            "SQL",
            "Unix",
            "Burp Suite",
            "ZAP",
            "Azure DevOps",
            "CI/CD",
        ],
    },
    Experience {
        period: "DEC 2024 — MAR 2025",
        title: "Data Science Intern",
        company: "AiVariant",
        link: "https://aivariant.com/",
        description: "Built and evaluated a hybrid book recommendation system using collaborative and content-based filtering techniques. Engineered a data preprocessing pipeline using pandas and NumPy to clean and transform user interaction data. Assessed model performance using RMSE, precision, and recall metrics to select the optimal algorithm for deployment.",
        technologies: &[
            "Python",
            "Pandas",
            "NumPy",
            "Scikit-learn",
            "Collaborative Filtering",
            "Content-based Filtering",
            "Machine Learning",
        ],
    },
    Experience {
        period: "JUL 2024 — SEP 2024",
        title: "Data Science Intern",
        company: "Technocolabs Softwares Inc.",
        link: "https://www.technocolabs.com/",
        description: "Developed regression models to forecast mortgage prepayment risk, building interactive dashboards with matplotlib/seaborn to visualize results and support financial decision-making. Executed a full data science project lifecycle to predict employee attrition; conducted exploratory data analysis (EDA), engineered features from HR data, and built classification models to identify key attrition drivers.",
        technologies: &[
            "Python",
            "Pandas",
            "Matplotlib",
            "Seaborn",
            "Regression Modeling",
            "Classification",
            "EDA",
            "Feature Engineering",
        ],
    },
    Experience {
        period: "2021 — 2024",
        title: "Senior Executive",
        company: "VOIS",
        link: "https://www.vodafone.co.uk/",
        description: "Automated database validations and financial report testing using SQL during system migration. Performed API testing with Postman, Swagger, and SoapUI. Refactored test scripts for integration into CI/CD pipelines. Led exploratory testing to identify edge cases beyond automated coverage.",
        technologies: &[
            "UFT",
            "Python",
            "Postman",
            "SQL",
            "Unix",
            "Swagger",
            "SoapUI",
            "Mainframe Testing",
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub external: &'static str,
    pub image: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Book Recommendation System",
        description: "A hybrid recommendation engine that combines collaborative filtering with content-based approaches. Built preprocessing pipelines to handle user interaction data and optimized model performance using RMSE, precision, and recall metrics.",
        technologies: &[
            "Python",
            "pandas",
            "NumPy",
            "scikit-learn",
            "collaborative filtering",
            "content-based filtering",
            "streamlit",
        ],
        external: "https://book-recommend-project.streamlit.app/",
        image: "/images/book-recommendations.jpeg",
    },
    Project {
        title: "Mushroom Classification",
        description: "A complete machine learning pipeline that classifies mushrooms as edible or poisonous with 95%+ accuracy. Built using Random Forest and SVM algorithms, deployed as an interactive Streamlit application for real-time predictions.",
        technologies: &[
            "Python",
            "pandas",
            "NumPy",
            "scikit-learn",
            "Random Forest",
            "SVM",
            "Streamlit",
            "machine learning deployment",
        ],
        external: "https://mushroom-health.streamlit.app/",
        image: "/images/streamlit-dashboard.jpeg",
    },
    Project {
        title: "Titanic Survival Predictor",
        description: "Classic machine learning project with a modern twist. Engineered a logistic regression model with custom feature engineering, then built a user-friendly web interface that predicts passenger survival probability.",
        technologies: &[
            "Python",
            "pandas",
            "NumPy",
            "scikit-learn",
            "logistic regression",
            "Streamlit",
            "feature engineering",
        ],
        external: "https://titanic-survival-predict.streamlit.app/",
        image: "/images/streamlit.jpeg",
    },
];

pub struct ArchiveEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub made_at: &'static str,
    pub built_with: &'static [&'static str],
    pub link: &'static str,
    pub link_text: Option<&'static str>,
}

pub const ARCHIVE: &[ArchiveEntry] = &[
    ArchiveEntry {
        year: "2024",
        title: "Mortgage Prepayment Risk Analysis",
        made_at: "Technocolabs Softwares Inc.",
        built_with: &[
            "Python",
            "pandas",
            "NumPy",
            "scikit-learn",
            "matplotlib",
            "seaborn",
            "EDA",
            "feature engineering",
            "classification",
        ],
        link: "https://github.com/sohebkh13/Prepayment-Mortgage-Trading-Analysis-and-Prediction",
        link_text: Some("Mortgage Prepayment Risk Analysis"),
    },
    ArchiveEntry {
        year: "2024",
        title: "Employee Attrition Prediction",
        made_at: "Technocolabs Softwares Inc.",
        built_with: &["React", "TypeScript", "Next.js", "Contentful"],
        link: "https://github.com/sohebkh13/Acme-AttritionForecast-Analysis-and-Prediction/blob/main/Acme_AttritionForecast_Analysis%20and%20Prediction.ipynb",
        link_text: Some("Employee Attrition Prediction"),
    },
];

pub const WRITING_TOPICS: &[&str] = &[
    "Machine Learning",
    "Data Science",
    "Test Automation",
    "Python",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn external_links() -> Vec<&'static str> {
        let mut links: Vec<&'static str> = SOCIAL_LINKS.iter().map(|link| link.href).collect();
        links.extend(RESUMES.iter().map(|resume| resume.href));
        links.extend(EXPERIENCES.iter().map(|experience| experience.link));
        links.extend(PROJECTS.iter().map(|project| project.external));
        links.extend(ARCHIVE.iter().map(|entry| entry.link));
        links.extend(PAST_EMPLOYERS.iter().map(|employer| employer.href));
        links.push(CURRENT_EMPLOYER.href);
        links.push(DESIGN_CREDIT_URL);
        links
    }

    #[test]
    fn external_links_are_absolute_https() {
        for link in external_links() {
            assert!(link.starts_with("https://"), "{link} is not an https URL");
        }
    }

    #[test]
    fn typewriter_has_phrases() {
        assert!(!TYPEWRITER_PHRASES.is_empty());
        assert!(TYPEWRITER_PHRASES.iter().all(|phrase| !phrase.is_empty()));
    }

    #[test]
    fn every_bilingual_label_has_both_languages() {
        for label in RESUMES.iter().map(|resume| &resume.label).chain([&HOBBY]) {
            assert!(!label.primary.is_empty());
            assert!(!label.alternate.is_empty());
            assert_ne!(label.primary, label.alternate);
        }
    }
}
