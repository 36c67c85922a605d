//! Built-in project catalog.

use super::project::Project;
use crate::ids::ProjectId;

#[allow(clippy::too_many_arguments)]
fn entry(
    id: u32,
    title: &str,
    description: &str,
    full_description: &str,
    tech: &[&str],
    link: &str,
    demo: &str,
    year: u16,
    role: &str,
    is_featured: bool,
) -> Project {
    Project {
        id: ProjectId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        full_description: full_description.to_string(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        link: link.to_string(),
        demo: (!demo.is_empty()).then(|| demo.to_string()),
        year,
        role: role.to_string(),
        is_featured,
    }
}

pub(super) fn sample_projects() -> Vec<Project> {
    vec![
        entry(
            1,
            "Autonomous Problem-Solving Agent",
            "An AI agent that autonomously diagnoses issues, retrieves context, and executes \
             resolution workflows using LLMs and tool-based reasoning.",
            "Designed and built an autonomous AI agent capable of end-to-end problem solving for \
             operational and system issues. The agent uses LLM-driven reasoning to analyze problem \
             statements, retrieve relevant context via embedding-based semantic search, and invoke \
             tools to recommend or execute corrective actions. Implemented agentic workflows with \
             Retrieval-Augmented Generation (RAG), enabling accurate, context-aware responses over \
             large operational datasets. Deployed as a scalable backend service with low-latency \
             inference and robust monitoring.",
            &["Python", "FastAPI", "LLMs", "RAG", "Vector Databases"],
            "https://github.com/asb404/PSA-Agent",
            "",
            2025,
            "AI Engineer",
            true,
        ),
        entry(
            2,
            "SentiCloud",
            "Scalable cloud-native ML system for parallel sentiment analysis with high-throughput \
             message processing.",
            "Designed and built SentiCloud, a scalable cloud-based machine learning platform for \
             parallel sentiment analysis. Developed and operated a cloud-native Kubernetes system \
             on Google Cloud Platform (GCP) with autoscaling and self-healing capabilities. The \
             system processes high-volume streaming messages using distributed workers, achieving \
             sustained throughput of over 5,000 messages per second with sub-second end-to-end \
             latency. Implemented robust deployment, monitoring, and fault-tolerance mechanisms to \
             ensure 99.9% service uptime under variable load.",
            &[
                "Python",
                "Machine Learning",
                "Sentiment Analysis",
                "Distributed Systems",
                "Kubernetes",
                "Google Cloud Platform (GCP)",
                "Docker",
                "Autoscaling",
                "Cloud Monitoring",
            ],
            "https://github.com/asb404/senti-cloud",
            "",
            2025,
            "Cloud ML Engineer",
            true,
        ),
        entry(
            3,
            "Intelligent Credit Risk & Limit Optimization",
            "Machine learning system for credit risk assessment and dynamic credit limit \
             optimization.",
            "Designed and implemented an end-to-end machine learning pipeline to assess customer \
             credit risk and optimize credit limits. The system includes large-scale data \
             preprocessing, feature engineering, model selection, and hyperparameter tuning to \
             improve predictive accuracy and robustness. Leveraged ensemble-based algorithms, \
             including XGBoost and Scikit-learn models, to achieve 91% classification accuracy, \
             representing a 12% performance improvement over baseline approaches. The optimized \
             risk predictions enabled more reliable credit decisions and informed dynamic credit \
             limit strategies.",
            &[
                "Python",
                "Machine Learning",
                "Credit Risk Modeling",
                "Feature Engineering",
                "XGBoost",
                "Scikit-learn",
                "Hyperparameter Tuning",
                "Data Preprocessing",
            ],
            "https://github.com/asb404/Intelligent-Optimal-Credit-Risk",
            "",
            2024,
            "Machine Learning Engineer",
            true,
        ),
        entry(
            4,
            "Scheduler Microservice",
            "A distributed scheduler microservice for managing and executing time-based and \
             event-driven tasks in a microservices architecture.",
            "Designed and built a production-ready Scheduler Microservice to centralize cron-based \
             and event-driven job execution across a distributed microservices ecosystem. The \
             service exposes RESTful APIs to create, update, retrieve, delete, and manually trigger \
             scheduled jobs, while leveraging RabbitMQ for asynchronous task dispatch and reliable \
             message-driven execution. Implemented persistent job storage using a database to \
             ensure durability and recovery across restarts. Containerized the service using \
             Docker and deployed it on Kubernetes to enable horizontal scaling, fault tolerance, \
             and seamless orchestration. The architecture promotes loose coupling, high \
             availability, and independent deployment of scheduling logic.",
            &[
                "Java",
                "Spring Boot",
                "RabbitMQ",
                "MongoDB",
                "REST APIs",
                "Docker",
                "Kubernetes",
            ],
            "https://github.com/asb404/Schuduler-microservice",
            "",
            2025,
            "Backend Engineer",
            true,
        ),
        entry(
            5,
            "Portfolio Website",
            "Modern portfolio built with Next.js and Tailwind CSS",
            "Designed and developed a responsive portfolio website with smooth animations, dark \
             mode, and optimized performance. Features include project showcase, experience \
             timeline, and contact form.",
            &["Next.js", "TypeScript", "Tailwind CSS", "Framer Motion"],
            "https://github.com/asb404/Portfolio",
            "https://antara.vercel.app",
            2026,
            "Frontend Developer",
            false,
        ),
    ]
}
