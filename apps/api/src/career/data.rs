// Compiled-in career profiles and scoring rules.
// Profile order is significant: it is the tie-break order for equal scores.

use crate::career::catalog::{CareerProfile, ScoringRule};
use crate::career::questions::Question;

fn profile(
    title: &str,
    description: &str,
    salary_range: &str,
    growth_path: &str,
    skills: &[&str],
) -> CareerProfile {
    CareerProfile {
        title: title.to_string(),
        description: description.to_string(),
        salary_range: salary_range.to_string(),
        growth_path: growth_path.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn rule(question: Question, option: &str, weights: &[(&str, u32)]) -> ScoringRule {
    ScoringRule {
        question,
        option: option.to_string(),
        weights: weights.iter().map(|(t, w)| (t.to_string(), *w)).collect(),
    }
}

pub fn builtin_profiles() -> Vec<CareerProfile> {
    vec![
        profile(
            "BPO Technical Support",
            "Resolve customer technical issues over phone, chat and email for global clients.",
            "₹2.5–4.5 LPA",
            "Support Associate → Senior Associate → Team Lead → Support Manager",
            &["Troubleshooting", "Customer Communication", "Ticketing Systems", "Patience"],
        ),
        profile(
            "Junior Software Developer",
            "Write, test and maintain application code as part of a product engineering team.",
            "₹3.5–7 LPA",
            "Junior Developer → Software Engineer → Senior Engineer → Tech Lead",
            &["Programming Fundamentals", "Git", "Debugging", "Data Structures"],
        ),
        profile(
            "IT Help Desk Specialist",
            "Keep an organisation's people productive by fixing hardware, software and access problems.",
            "₹2.5–5 LPA",
            "Help Desk Analyst → Desktop Support Engineer → System Administrator → IT Manager",
            &["Operating Systems", "Networking Basics", "Active Directory", "Remote Support"],
        ),
        profile(
            "Full Stack Developer",
            "Build complete web applications, from database schema to user interface.",
            "₹6–15 LPA",
            "Full Stack Developer → Senior Developer → Lead Engineer → Architect",
            &["JavaScript", "React", "REST APIs", "SQL", "Cloud Deployment"],
        ),
        profile(
            "Data Analyst",
            "Turn raw business data into reports and insights that drive decisions.",
            "₹4–9 LPA",
            "Data Analyst → Senior Analyst → Analytics Lead → Head of Analytics",
            &["SQL", "Excel", "Data Visualisation", "Statistics"],
        ),
        profile(
            "DevOps Engineer",
            "Automate builds, deployments and infrastructure so teams can ship reliably.",
            "₹7–18 LPA",
            "DevOps Engineer → Senior DevOps → Site Reliability Lead → Platform Head",
            &["Linux", "CI/CD", "Docker", "Kubernetes", "Scripting"],
        ),
        profile(
            "Cybersecurity Analyst",
            "Monitor, detect and respond to threats against an organisation's systems.",
            "₹5–14 LPA",
            "Security Analyst → Security Engineer → Security Architect → CISO",
            &["Network Security", "SIEM", "Incident Response", "Threat Analysis"],
        ),
        profile(
            "Solution Architect",
            "Design end-to-end technical solutions that meet business requirements at scale.",
            "₹20–40 LPA",
            "Senior Engineer → Solution Architect → Enterprise Architect → CTO",
            &["System Design", "Cloud Platforms", "Integration Patterns", "Stakeholder Management"],
        ),
        profile(
            "Data Scientist",
            "Build statistical and machine-learning models that predict and explain outcomes.",
            "₹8–22 LPA",
            "Data Scientist → Senior Data Scientist → ML Lead → Head of Data Science",
            &["Python", "Machine Learning", "Statistics", "Experiment Design"],
        ),
        profile(
            "Cloud Architect",
            "Plan and govern an organisation's cloud estate for cost, security and reliability.",
            "₹22–45 LPA",
            "Cloud Engineer → Cloud Architect → Principal Architect → VP Infrastructure",
            &["AWS/Azure/GCP", "Networking", "Security", "Cost Optimisation"],
        ),
        profile(
            "Product Manager (Tech)",
            "Decide what gets built and why, balancing users, business and engineering.",
            "₹15–35 LPA",
            "Associate PM → Product Manager → Senior PM → Director of Product",
            &["Product Strategy", "User Research", "Roadmapping", "Data-Driven Decisions"],
        ),
        profile(
            "Engineering Manager",
            "Lead engineering teams, grow people and deliver projects predictably.",
            "₹30–60 LPA",
            "Tech Lead → Engineering Manager → Senior Manager → Director of Engineering",
            &["People Management", "Technical Leadership", "Hiring", "Delivery Planning"],
        ),
        profile(
            "Chief Technology Officer",
            "Own the technology vision and organisation of a company.",
            "₹60 LPA+",
            "Director of Engineering → VP Engineering → CTO",
            &["Technology Strategy", "Executive Leadership", "Architecture", "Budgeting"],
        ),
        profile(
            "Tech Entrepreneur",
            "Found and grow a technology business from idea to market.",
            "Variable (equity-driven)",
            "Founder → Funded Startup → Scale-up CEO/CTO",
            &["Product Vision", "Fundraising", "Team Building", "Go-To-Market"],
        ),
        profile(
            "IT Consultant",
            "Advise clients on technology choices and lead implementation projects.",
            "₹8–25 LPA",
            "Analyst → Consultant → Senior Consultant → Principal / Partner",
            &["Requirements Analysis", "Client Management", "Solution Design", "Presentation"],
        ),
        profile(
            "Freelance Developer",
            "Deliver software projects independently for a portfolio of clients.",
            "Project-based (₹5–30 LPA equivalent)",
            "Freelancer → Established Freelancer → Agency Owner",
            &["Full Stack Development", "Client Communication", "Estimation", "Self-Management"],
        ),
    ]
}

pub fn builtin_rules() -> Vec<ScoringRule> {
    use Question::*;

    vec![
        // Experience level
        rule(
            ExperienceLevel,
            "Recent graduate with 0-2 years of experience",
            &[
                ("Junior Software Developer", 2),
                ("Data Analyst", 2),
                ("IT Help Desk Specialist", 1),
                ("BPO Technical Support", 1),
            ],
        ),
        rule(
            ExperienceLevel,
            "Professional with 3-7 years of experience",
            &[
                ("Full Stack Developer", 2),
                ("DevOps Engineer", 2),
                ("Cybersecurity Analyst", 2),
                ("Data Scientist", 2),
                ("Product Manager (Tech)", 1),
            ],
        ),
        rule(
            ExperienceLevel,
            "Senior professional with 8+ years of experience",
            &[
                ("Solution Architect", 3),
                ("Engineering Manager", 3),
                ("Chief Technology Officer", 3),
                ("Cloud Architect", 2),
            ],
        ),
        // Work environment
        rule(
            WorkEnvironment,
            "Collaborative team settings",
            &[("Product Manager (Tech)", 2), ("Engineering Manager", 2)],
        ),
        rule(
            WorkEnvironment,
            "Independent, remote work",
            &[("Freelance Developer", 3), ("IT Consultant", 1)],
        ),
        rule(
            WorkEnvironment,
            "Fast-paced startup environment",
            &[("Tech Entrepreneur", 3), ("Full Stack Developer", 1)],
        ),
        rule(
            WorkEnvironment,
            "Structured, organized workplaces",
            &[
                ("BPO Technical Support", 2),
                ("IT Help Desk Specialist", 2),
                ("Cybersecurity Analyst", 1),
            ],
        ),
        // Skill focus
        rule(
            SkillFocus,
            "Leadership and management",
            &[
                ("Engineering Manager", 3),
                ("Chief Technology Officer", 2),
                ("Product Manager (Tech)", 2),
            ],
        ),
        rule(
            SkillFocus,
            "Technical and analytical",
            &[
                ("Data Analyst", 2),
                ("Data Scientist", 2),
                ("Cybersecurity Analyst", 2),
            ],
        ),
        rule(
            SkillFocus,
            "Creative problem solving",
            &[("Full Stack Developer", 2), ("Tech Entrepreneur", 2)],
        ),
        rule(
            SkillFocus,
            "Communication and interpersonal",
            &[("BPO Technical Support", 3), ("IT Consultant", 2)],
        ),
        // Career driver
        rule(
            CareerDriver,
            "Building something of my own",
            &[("Tech Entrepreneur", 3), ("Freelance Developer", 2)],
        ),
        rule(
            CareerDriver,
            "Solving complex problems",
            &[
                ("Solution Architect", 2),
                ("Data Scientist", 2),
                ("DevOps Engineer", 1),
            ],
        ),
        rule(
            CareerDriver,
            "Financial security",
            &[("IT Consultant", 2), ("Cloud Architect", 2)],
        ),
        rule(
            CareerDriver,
            "Helping people",
            &[("IT Help Desk Specialist", 3), ("BPO Technical Support", 2)],
        ),
        // Domain interest
        rule(
            DomainInterest,
            "Software development and programming",
            &[("Junior Software Developer", 3), ("Full Stack Developer", 3)],
        ),
        rule(
            DomainInterest,
            "Data and analytics",
            &[("Data Analyst", 3), ("Data Scientist", 3)],
        ),
        rule(
            DomainInterest,
            "Cloud and infrastructure",
            &[("DevOps Engineer", 3), ("Cloud Architect", 3)],
        ),
        rule(
            DomainInterest,
            "Cybersecurity",
            &[("Cybersecurity Analyst", 3)],
        ),
        rule(
            DomainInterest,
            "Technical support and troubleshooting",
            &[("IT Help Desk Specialist", 3), ("BPO Technical Support", 3)],
        ),
        rule(
            DomainInterest,
            "Business and product strategy",
            &[
                ("Product Manager (Tech)", 3),
                ("Tech Entrepreneur", 2),
                ("IT Consultant", 2),
            ],
        ),
        // Risk appetite
        rule(
            RiskAppetite,
            "I thrive on high risk and high reward",
            &[("Tech Entrepreneur", 3), ("Freelance Developer", 2)],
        ),
        rule(
            RiskAppetite,
            "Calculated risks are fine",
            &[
                ("Product Manager (Tech)", 2),
                ("IT Consultant", 2),
                ("Chief Technology Officer", 1),
            ],
        ),
        rule(
            RiskAppetite,
            "I prefer stability",
            &[
                ("BPO Technical Support", 2),
                ("IT Help Desk Specialist", 2),
                ("Data Analyst", 1),
            ],
        ),
        // Team role
        rule(
            TeamRole,
            "The visionary who sets direction",
            &[("Tech Entrepreneur", 3), ("Chief Technology Officer", 3)],
        ),
        rule(
            TeamRole,
            "The leader who grows people",
            &[("Engineering Manager", 3), ("Product Manager (Tech)", 2)],
        ),
        rule(
            TeamRole,
            "The expert who designs systems",
            &[("Solution Architect", 3), ("Cloud Architect", 3)],
        ),
        rule(
            TeamRole,
            "The builder who ships features",
            &[
                ("Junior Software Developer", 2),
                ("Full Stack Developer", 2),
                ("Freelance Developer", 2),
            ],
        ),
        rule(
            TeamRole,
            "The guardian who keeps things running",
            &[
                ("DevOps Engineer", 3),
                ("Cybersecurity Analyst", 2),
                ("IT Help Desk Specialist", 1),
            ],
        ),
        // Five-year goal
        rule(
            FiveYearGoal,
            "Running my own company",
            &[("Tech Entrepreneur", 3)],
        ),
        rule(
            FiveYearGoal,
            "Leading a technology organisation",
            &[("Chief Technology Officer", 3), ("Engineering Manager", 2)],
        ),
        rule(
            FiveYearGoal,
            "Recognised as a technical specialist",
            &[
                ("Data Scientist", 2),
                ("Cybersecurity Analyst", 2),
                ("Solution Architect", 2),
            ],
        ),
        rule(
            FiveYearGoal,
            "Advising many different clients",
            &[("IT Consultant", 3), ("Freelance Developer", 2)],
        ),
    ]
}
