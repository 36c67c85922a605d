use serde::{Deserialize, Serialize};

/// One entry of the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub points: Vec<String>,
    pub tech: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Timeline shown in the experience section, most recent first.
pub fn sample_timeline() -> Vec<Experience> {
    vec![
        Experience {
            role: "Software Developer (Research Assistant)".into(),
            company: "Indiana University".into(),
            period: "Mar 2025 – Present".into(),
            description: "Research-focused engineering work on AI systems, data pipelines, and \
                          performance-critical computation."
                .into(),
            points: strings(&[
                "Built FastAPI services using Claude and local LLMs to power agentic RAG pipelines \
                 for semantic access to Allen Brain Atlas datasets.",
                "Implemented tool-augmented LLM agents using LangChain and LangGraph with function \
                 calling and dynamic routing, integrating 10+ data and analysis tools, evaluation \
                 workflows, and response caching to reduce inference latency by 35%.",
                "Built optimized Python data pipelines for neuroscience text and brain image data, \
                 supporting domain adaptation and fine-tuning experiments across multiple model \
                 variants and delivering >99% reliable backend inference.",
                "Optimized Python-based data processing for large-scale tissue mapping and \
                 projection, improving throughput by 30% and enabling precise alignment of 1,000+ \
                 tissue blocks.",
                "Built reusable, production-quality data transformation modules following SDLC \
                 best practices, reducing preprocessing time by 25% and improving workflow \
                 transparency.",
                "Implemented multithreaded, memory-efficient pipelines with algorithmic and data \
                 structure optimizations, accelerating large-scale computations by 20%.",
            ]),
            tech: strings(&["FastAPI", "RAG", "Python", "Data Pipelines", "AI Systems"]),
        },
        Experience {
            role: "Software Development Engineer Intern".into(),
            company: "Amazon".into(),
            period: "Jun 2025 – Aug 2025".into(),
            description: "Worked on cloud-native, AI-powered automation and monitoring systems \
                          supporting large-scale operational workflows."
                .into(),
            points: strings(&[
                "Designed distributed, cloud-native monitoring pipelines on AWS using Lambda, \
                 CloudWatch, CloudFormation, DynamoDB, SQS, and DLQ, centralizing order event \
                 tracking and alerting, boosting on-call efficiency by 35%.",
                "Implemented embedding-based vector retrieval over 100K+ operational records, \
                 enabling semantic search, similarity matching, and 30% faster incident \
                 resolution.",
                "Applied Dependency Injection and Registry design patterns to automate DLQ redrive \
                 operations, enhancing system extensibility by 65% and reducing MTTR by 40%.",
                "Developed production-grade user interfaces using TypeScript, JavaScript, and \
                 Vue.js, integrated with REST and GraphQL APIs, AWS IAM authentication, and robust \
                 data validation.",
                "Built CI/CD pipelines with automated unit, integration, and regression tests \
                 using JUnit and Mockito, ensuring reliable deployments and shortening release \
                 cycles by 25%.",
            ]),
            tech: strings(&["AWS", "Amazon Q", "Bedrock", "Vector DB", "Cloud Native"]),
        },
        Experience {
            role: "Software Engineer".into(),
            company: "Motorola Mobility".into(),
            period: "Aug 2022 – Aug 2024".into(),
            description: "Built AI-enabled Android and backend systems delivering \
                          performance-critical features to production users."
                .into(),
            points: strings(&[
                "Built AI-driven Android mobile app features (Pay Attention, Remember This) with \
                 Java, Kotlin, Android SDK, Jetpack Compose, and AOSP, delivering smooth \
                 experiences to 100K+ users with an 18% performance gain.",
                "Optimized mobile performance and memory usage with multithreaded data \
                 processing, backend integration, and Android-specific memory management, \
                 reducing latency by 20%.",
                "Applied algorithmic and data structure optimizations across Android components \
                 including Activities, Services, Broadcast Receivers, and Content Providers, \
                 streamlining app workflows and improving responsiveness and reliability.",
                "Built custom Jetpack Compose and React Native UI components to deliver \
                 consistent cross-platform experiences, with unit/integration tests improving \
                 usability and maintainability by 15%.",
                "Coordinated feature delivery in Agile sprints, including design discussions, \
                 planning, and peer reviews, ensuring scalable production releases.",
                "Designed and integrated AI-powered decision logic into Android system workflows \
                 for the “Care for Dependents” device mode, earning 2nd place at Motorola India \
                 Hackathon 2023.",
            ]),
            tech: strings(&["Android", "Machine Learning", "Backend", "Mobile AI"]),
        },
    ]
}
