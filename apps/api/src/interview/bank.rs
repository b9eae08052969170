//! Curated interview questions with ideal answers, keyed by career title.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterviewQuestion {
    pub question: &'static str,
    pub ideal_answer: &'static str,
}

/// One entry per career title, in career declaration order.
pub const QUESTION_BANK: &[(&str, &[InterviewQuestion])] = &[
    (
        "BPO Technical Support",
        &[
            InterviewQuestion {
                question: "Tell me about a time when you had to troubleshoot a technical issue for a customer over the phone.",
                ideal_answer: "I would describe a specific situation where I systematically diagnosed a problem, communicated clearly with the customer, and resolved their issue efficiently while maintaining a professional and empathetic tone throughout the interaction.",
            },
            InterviewQuestion {
                question: "How would you handle an angry customer who is frustrated with a technical problem?",
                ideal_answer: "I would remain calm, actively listen to their concerns, apologize for their frustration, ask clarifying questions to understand the issue, and work diligently to provide a solution while keeping them informed of my progress.",
            },
            InterviewQuestion {
                question: "What steps would you take to resolve a software installation issue for a client?",
                ideal_answer: "I would first verify system requirements, check for conflicting software, ensure proper permissions, guide the customer through a clean installation process, and provide follow-up documentation or support if needed.",
            },
            InterviewQuestion {
                question: "How do you prioritize multiple support tickets when working under pressure?",
                ideal_answer: "I would assess tickets based on urgency and impact, prioritize critical business functions, communicate expected response times to customers, and escalate complex issues appropriately while maintaining detailed documentation.",
            },
            InterviewQuestion {
                question: "Describe your experience with remote desktop tools and how you use them effectively.",
                ideal_answer: "I would explain my familiarity with tools like TeamViewer or Windows Remote Desktop, emphasizing security protocols, customer permission procedures, and how I guide customers through the remote access process professionally.",
            },
            InterviewQuestion {
                question: "How would you explain a complex technical concept to a non-technical customer?",
                ideal_answer: "I would use simple analogies, avoid technical jargon, break down the concept into digestible steps, check for understanding frequently, and provide visual aids or step-by-step instructions when possible.",
            },
            InterviewQuestion {
                question: "What would you do if you encounter a technical issue you've never seen before?",
                ideal_answer: "I would acknowledge the situation honestly, utilize available resources like knowledge bases and documentation, consult with senior team members if needed, and keep the customer informed while working toward a solution.",
            },
            InterviewQuestion {
                question: "How do you ensure customer satisfaction while maintaining call efficiency?",
                ideal_answer: "I would focus on active listening, provide clear solutions, confirm understanding, follow up appropriately, and balance thoroughness with time management to meet both customer needs and performance metrics.",
            },
            InterviewQuestion {
                question: "Describe a situation where you had to escalate a technical issue.",
                ideal_answer: "I would describe a specific scenario where I recognized the limits of my expertise, properly documented the issue, communicated clearly with the escalation team, and ensured smooth handoff while keeping the customer informed.",
            },
            InterviewQuestion {
                question: "How do you stay updated with new technologies and software updates?",
                ideal_answer: "I would mention regular training participation, reading technical documentation, following industry newsletters, practicing with new software versions, and participating in team knowledge-sharing sessions.",
            },
            InterviewQuestion {
                question: "What's your approach to documenting customer interactions and solutions?",
                ideal_answer: "I would emphasize clear, detailed documentation including problem description, steps taken, resolution provided, and any follow-up required, ensuring future support agents can easily understand and continue assistance if needed.",
            },
            InterviewQuestion {
                question: "How would you handle multiple customers calling about the same widespread technical issue?",
                ideal_answer: "I would identify the pattern quickly, document the issue thoroughly, coordinate with the technical team for a broader solution, and proactively communicate with affected customers about the known issue and expected resolution timeline.",
            },
            InterviewQuestion {
                question: "Describe your experience with ticketing systems and case management.",
                ideal_answer: "I would discuss familiarity with systems like ServiceNow or Zendesk, emphasizing proper case creation, status updates, customer communication, and the importance of maintaining accurate records for reporting and follow-up.",
            },
            InterviewQuestion {
                question: "How do you maintain professional communication when dealing with difficult technical problems?",
                ideal_answer: "I would focus on remaining patient, using positive language, setting realistic expectations, providing regular updates, and maintaining empathy while working systematically through complex technical challenges.",
            },
            InterviewQuestion {
                question: "What motivates you to work in technical support, and how do you handle repetitive tasks?",
                ideal_answer: "I would express genuine interest in helping others solve problems, finding satisfaction in successful resolutions, staying engaged by learning from each unique situation, and viewing repetitive tasks as opportunities to refine and perfect my process.",
            },
        ],
    ),
    (
        "Junior Software Developer",
        &[
            InterviewQuestion {
                question: "Tell me about your experience with programming languages and which one you're most comfortable with.",
                ideal_answer: "I would discuss my proficiency in languages like Python, JavaScript, or Java, provide specific examples of projects I've built, explain why I prefer certain languages for specific tasks, and demonstrate my understanding of programming fundamentals.",
            },
            InterviewQuestion {
                question: "How do you approach debugging a piece of code that isn't working as expected?",
                ideal_answer: "I would systematically reproduce the issue, use debugging tools and console logs, break down the problem into smaller parts, check my assumptions, and methodically trace through the code logic to identify and fix the root cause.",
            },
            InterviewQuestion {
                question: "Describe a challenging coding project you've worked on and how you overcame obstacles.",
                ideal_answer: "I would share a specific project example, explain the technical challenges encountered, describe the research and problem-solving approach I used, and highlight what I learned from the experience and how it improved my skills.",
            },
            InterviewQuestion {
                question: "How do you stay current with new technologies and programming trends?",
                ideal_answer: "I would mention following tech blogs, participating in online coding communities, taking online courses, contributing to open-source projects, attending webinars, and practicing with new frameworks through personal projects.",
            },
            InterviewQuestion {
                question: "What's your understanding of version control, and how have you used Git in your projects?",
                ideal_answer: "I would explain version control concepts, demonstrate familiarity with Git commands, discuss branching strategies, explain the importance of meaningful commit messages, and describe collaborative workflows like pull requests and code reviews.",
            },
            InterviewQuestion {
                question: "How would you explain a technical concept to a non-technical stakeholder?",
                ideal_answer: "I would use simple analogies, avoid jargon, focus on the business impact rather than technical details, provide visual examples when possible, and ensure understanding by asking for feedback and clarifying questions.",
            },
            InterviewQuestion {
                question: "Describe your experience with testing and how you ensure code quality.",
                ideal_answer: "I would discuss unit testing, integration testing, explain test-driven development concepts, mention testing frameworks I've used, and emphasize the importance of writing maintainable, well-documented code.",
            },
            InterviewQuestion {
                question: "How do you handle working on a team and collaborating with other developers?",
                ideal_answer: "I would emphasize clear communication, active participation in code reviews, respect for team coding standards, willingness to learn from others, and contribution to a positive team environment through knowledge sharing.",
            },
            InterviewQuestion {
                question: "What's your approach to learning a new programming framework or library?",
                ideal_answer: "I would start with official documentation, work through tutorials, build small practice projects, join community forums for support, and gradually apply new concepts to real projects while seeking feedback from experienced developers.",
            },
            InterviewQuestion {
                question: "How do you prioritize tasks when working on multiple features or bug fixes?",
                ideal_answer: "I would assess impact and urgency, communicate with team leads about priorities, break large tasks into manageable chunks, maintain clear documentation of progress, and regularly update stakeholders on status and any blockers.",
            },
            InterviewQuestion {
                question: "Describe a time when you had to learn something new quickly for a project.",
                ideal_answer: "I would share a specific example of rapid learning, explain my research methodology, describe how I applied new knowledge effectively, and highlight the successful outcome while acknowledging areas for continued improvement.",
            },
            InterviewQuestion {
                question: "How do you approach code reviews, both giving and receiving feedback?",
                ideal_answer: "I would emphasize constructive feedback focused on code improvement, asking questions to understand different approaches, being open to suggestions, maintaining professionalism, and viewing reviews as learning opportunities.",
            },
            InterviewQuestion {
                question: "What's your understanding of database concepts and how have you worked with databases?",
                ideal_answer: "I would discuss relational database concepts, SQL query experience, understanding of database design principles, mention specific databases I've worked with, and explain how I optimize queries for performance.",
            },
            InterviewQuestion {
                question: "How do you handle tight deadlines while maintaining code quality?",
                ideal_answer: "I would focus on clear scope definition, efficient time management, effective communication about realistic timelines, maintaining essential testing practices, and documenting any technical debt for future improvement.",
            },
            InterviewQuestion {
                question: "What attracts you to software development, and where do you see yourself growing in this field?",
                ideal_answer: "I would express passion for problem-solving, creating solutions that impact users, continuous learning opportunities, desire to grow technical expertise, and long-term goals for advancing in software development career paths.",
            },
        ],
    ),
    (
        "IT Help Desk Specialist",
        &[
            InterviewQuestion {
                question: "How would you troubleshoot a computer that won't start up?",
                ideal_answer: "I would systematically check power connections, verify power supply functionality, test with known good components, check for POST beeps, examine RAM and connections, and escalate to hardware replacement if necessary.",
            },
            InterviewQuestion {
                question: "Describe your approach to helping a user who has forgotten their password.",
                ideal_answer: "I would verify the user's identity through established protocols, guide them through the official password reset process, ensure they understand password requirements, and provide tips for creating secure, memorable passwords.",
            },
            InterviewQuestion {
                question: "How do you prioritize help desk tickets when you have multiple urgent requests?",
                ideal_answer: "I would assess business impact, check for widespread outages affecting multiple users, consider deadlines and priorities, communicate estimated response times, and escalate appropriately while keeping all requesters informed.",
            },
            InterviewQuestion {
                question: "Tell me about a time you had to explain a technical solution to a frustrated user.",
                ideal_answer: "I would describe a specific situation where I remained patient, listened actively to understand their frustration, explained the solution in simple terms, provided step-by-step guidance, and followed up to ensure their satisfaction.",
            },
            InterviewQuestion {
                question: "How would you handle a situation where you don't know the solution to a user's problem?",
                ideal_answer: "I would be honest about not immediately knowing the solution, assure them I'll find an answer, research using available resources, consult with colleagues if needed, and provide regular updates until the issue is resolved.",
            },
            InterviewQuestion {
                question: "What's your experience with Active Directory and user account management?",
                ideal_answer: "I would discuss creating and managing user accounts, password resets, group memberships, understanding organizational units, applying group policies, and maintaining security protocols while providing efficient user support.",
            },
            InterviewQuestion {
                question: "How do you stay organized when managing multiple support cases throughout the day?",
                ideal_answer: "I would emphasize using ticketing systems effectively, maintaining clear case notes, setting appropriate priorities, using calendar reminders for follow-ups, and developing efficient workflows to track progress on all cases.",
            },
            InterviewQuestion {
                question: "Describe your experience with remote support tools and when you would use them.",
                ideal_answer: "I would explain familiarity with tools like TeamViewer or RDP, discuss security considerations, describe when remote access is appropriate, and emphasize always getting user permission before connecting remotely.",
            },
            InterviewQuestion {
                question: "How would you handle a network connectivity issue reported by multiple users?",
                ideal_answer: "I would quickly identify the scope of the problem, check network infrastructure status, communicate with network administrators, provide interim solutions where possible, and keep affected users updated on resolution progress.",
            },
            InterviewQuestion {
                question: "What's your approach to documenting solutions for future reference?",
                ideal_answer: "I would create clear, step-by-step documentation, include screenshots when helpful, organize information in a searchable knowledge base, and ensure solutions are written in a way that colleagues can easily follow.",
            },
            InterviewQuestion {
                question: "How do you handle users who repeatedly call with the same types of problems?",
                ideal_answer: "I would identify patterns in their issues, provide additional training or documentation, suggest preventive measures, work with their supervisor if appropriate, and maintain patience while helping them become more self-sufficient.",
            },
            InterviewQuestion {
                question: "Describe your experience with hardware troubleshooting and repair.",
                ideal_answer: "I would discuss systematic hardware diagnosis, familiarity with common failure points, experience with component replacement, understanding of warranty procedures, and when to escalate to specialized hardware technicians.",
            },
            InterviewQuestion {
                question: "How do you ensure you're providing excellent customer service while maintaining technical efficiency?",
                ideal_answer: "I would balance active listening with efficient problem-solving, maintain professional communication, provide clear explanations, follow up appropriately, and continuously look for ways to improve both service quality and resolution speed.",
            },
            InterviewQuestion {
                question: "What motivates you to work in IT support, and how do you handle stressful situations?",
                ideal_answer: "I would express satisfaction in helping others solve problems, appreciation for the variety of technical challenges, commitment to continuous learning, and strategies for managing stress through organization and positive communication.",
            },
            InterviewQuestion {
                question: "How would you train a new user on basic computer security practices?",
                ideal_answer: "I would cover password best practices, explain phishing recognition, demonstrate secure file sharing, discuss software update importance, and provide practical examples they can apply to protect both personal and company data.",
            },
        ],
    ),
    (
        "Full Stack Developer",
        &[
            InterviewQuestion {
                question: "Explain the difference between frontend and backend development and how they interact.",
                ideal_answer: "Frontend handles user interface and user experience using technologies like HTML, CSS, and JavaScript, while backend manages server logic, databases, and APIs. They interact through HTTP requests and responses, with the backend providing data and services that the frontend consumes.",
            },
            InterviewQuestion {
                question: "How do you approach designing a RESTful API?",
                ideal_answer: "I would design clear, resource-based URLs, use appropriate HTTP methods, implement consistent response formats, include proper status codes, design for scalability, include authentication and authorization, and provide comprehensive documentation.",
            },
            InterviewQuestion {
                question: "Describe your experience with both SQL and NoSQL databases and when you'd choose each.",
                ideal_answer: "SQL databases like PostgreSQL are ideal for structured data with complex relationships and ACID compliance, while NoSQL databases like MongoDB work better for flexible schemas, horizontal scaling, and document-based data structures.",
            },
            InterviewQuestion {
                question: "How do you ensure your applications are secure from common vulnerabilities?",
                ideal_answer: "I implement input validation, use parameterized queries to prevent SQL injection, implement proper authentication and authorization, use HTTPS, validate on both client and server sides, and regularly update dependencies to patch security vulnerabilities.",
            },
            InterviewQuestion {
                question: "Tell me about your experience with version control and deployment strategies.",
                ideal_answer: "I use Git for version control with feature branching, implement CI/CD pipelines for automated testing and deployment, use staging environments for testing, and employ strategies like blue-green deployments to minimize downtime.",
            },
            InterviewQuestion {
                question: "How do you optimize application performance on both frontend and backend?",
                ideal_answer: "Frontend: minimize bundle sizes, lazy loading, image optimization, caching. Backend: database query optimization, caching strategies, efficient algorithms, load balancing, and monitoring performance metrics to identify bottlenecks.",
            },
            InterviewQuestion {
                question: "Describe your experience with modern JavaScript frameworks and when you'd choose each.",
                ideal_answer: "I would discuss React for component-based UIs, Vue for simpler learning curves, Angular for enterprise applications, explaining that choice depends on project requirements, team expertise, and long-term maintenance considerations.",
            },
            InterviewQuestion {
                question: "How do you handle error handling and logging in full-stack applications?",
                ideal_answer: "I implement comprehensive error handling with try-catch blocks, use structured logging, create custom error classes, implement global error handlers, use monitoring tools for production tracking, and ensure errors are logged without exposing sensitive information.",
            },
            InterviewQuestion {
                question: "What's your approach to testing in full-stack development?",
                ideal_answer: "I implement unit tests for individual functions, integration tests for API endpoints, frontend component testing, end-to-end testing for user workflows, and maintain good test coverage while focusing on critical business logic.",
            },
            InterviewQuestion {
                question: "How do you stay current with the rapidly evolving web development ecosystem?",
                ideal_answer: "I follow tech blogs, participate in developer communities, attend conferences, contribute to open-source projects, experiment with new technologies in side projects, and continuously evaluate new tools for their practical benefits.",
            },
            InterviewQuestion {
                question: "Describe your experience with containerization and cloud deployment.",
                ideal_answer: "I use Docker for containerization to ensure consistent environments, work with orchestration tools like Kubernetes, deploy to cloud platforms like AWS or Azure, and implement infrastructure as code for reproducible deployments.",
            },
            InterviewQuestion {
                question: "How do you handle state management in complex frontend applications?",
                ideal_answer: "I evaluate the complexity to choose between component state, context API, or dedicated state management libraries like Redux, focusing on maintaining predictable state updates, minimizing prop drilling, and ensuring good performance.",
            },
            InterviewQuestion {
                question: "What's your approach to code architecture and maintaining clean, scalable code?",
                ideal_answer: "I follow SOLID principles, implement proper separation of concerns, use design patterns appropriately, maintain consistent coding standards, write self-documenting code, and regularly refactor to prevent technical debt accumulation.",
            },
            InterviewQuestion {
                question: "How do you collaborate effectively with designers, product managers, and other stakeholders?",
                ideal_answer: "I participate actively in planning meetings, ask clarifying questions about requirements, provide technical feasibility input, communicate progress regularly, and use tools like prototypes to ensure alignment between technical implementation and business goals.",
            },
            InterviewQuestion {
                question: "Describe a challenging full-stack project you've worked on and the technologies you used.",
                ideal_answer: "I would detail a specific project, explain the technical challenges faced, describe the technology stack chosen and why, discuss the problem-solving approach used, and highlight the successful outcomes and lessons learned.",
            },
        ],
    ),
    (
        "Data Analyst",
        &[
            InterviewQuestion {
                question: "How do you approach cleaning and preparing messy data for analysis?",
                ideal_answer: "I start by understanding the data structure, identify missing values and outliers, handle duplicates, standardize formats, validate data quality, document all transformations, and ensure the cleaned data maintains its integrity and business meaning.",
            },
            InterviewQuestion {
                question: "Explain a time when you had to present complex data findings to non-technical stakeholders.",
                ideal_answer: "I would describe a specific situation where I used clear visualizations, focused on business impact rather than technical details, told a story with the data, provided actionable recommendations, and ensured the audience understood the implications.",
            },
            InterviewQuestion {
                question: "How do you determine which statistical tests or analytical methods to use for a given problem?",
                ideal_answer: "I consider the type of data, the research question, sample size, distribution assumptions, and business context. I ensure the chosen method aligns with the data characteristics and provides meaningful insights for decision-making.",
            },
            InterviewQuestion {
                question: "Describe your experience with SQL and how you use it for data analysis.",
                ideal_answer: "I use SQL for data extraction, aggregation, joining tables, creating complex queries with window functions, performance optimization, and building views for recurring analysis needs while ensuring data accuracy and efficiency.",
            },
            InterviewQuestion {
                question: "How do you validate the accuracy and reliability of your analysis?",
                ideal_answer: "I cross-check results with multiple methods, validate against known benchmarks, perform sanity checks, use statistical significance testing, peer review when possible, and document assumptions and limitations clearly.",
            },
            InterviewQuestion {
                question: "What's your approach to creating effective data visualizations?",
                ideal_answer: "I choose appropriate chart types for the data, ensure clarity and readability, use consistent color schemes, avoid misleading representations, include proper labels and context, and focus on highlighting key insights for the intended audience.",
            },
            InterviewQuestion {
                question: "How do you handle situations where data shows unexpected or contradictory results?",
                ideal_answer: "I investigate the data collection process, check for errors in analysis, explore alternative explanations, consult with domain experts, validate findings through additional analysis, and communicate uncertainties transparently to stakeholders.",
            },
            InterviewQuestion {
                question: "Describe your experience with Excel/spreadsheet analysis versus programming tools like Python or R.",
                ideal_answer: "Excel is great for quick analysis and stakeholder collaboration, while Python/R offer more powerful statistical capabilities, automation, and reproducibility. I choose tools based on complexity, scale, and collaboration requirements.",
            },
            InterviewQuestion {
                question: "How do you prioritize multiple analysis requests with competing deadlines?",
                ideal_answer: "I assess business impact, communicate with requesters about urgency, estimate time requirements realistically, provide interim updates, and collaborate with managers to establish clear priorities while maintaining quality standards.",
            },
            InterviewQuestion {
                question: "What's your process for ensuring reproducible and documented analysis?",
                ideal_answer: "I maintain version control, document methodology and assumptions, use consistent file naming, create clear code comments, maintain analysis logs, and ensure others can understand and replicate my work.",
            },
            InterviewQuestion {
                question: "How do you stay current with new analytical tools and techniques?",
                ideal_answer: "I follow industry publications, participate in online courses, attend webinars, engage with data science communities, experiment with new tools on practice projects, and evaluate emerging techniques for practical applications.",
            },
            InterviewQuestion {
                question: "Describe a time when your analysis led to a significant business decision or improvement.",
                ideal_answer: "I would share a specific example where data analysis revealed actionable insights, explain how I communicated findings effectively, describe the business impact achieved, and highlight the importance of data-driven decision making.",
            },
            InterviewQuestion {
                question: "How do you handle missing data in your analysis?",
                ideal_answer: "I evaluate the pattern and extent of missing data, determine if it's random or systematic, choose appropriate handling methods like imputation or exclusion, document the approach taken, and assess the impact on analysis validity.",
            },
            InterviewQuestion {
                question: "What's your experience with A/B testing and experimental design?",
                ideal_answer: "I understand proper sample size calculation, randomization importance, controlling for confounding variables, statistical significance testing, and practical significance evaluation while ensuring ethical and valid experimental practices.",
            },
            InterviewQuestion {
                question: "How do you balance the need for thorough analysis with business demands for quick insights?",
                ideal_answer: "I provide preliminary findings quickly when appropriate, clearly communicate confidence levels, prioritize high-impact analysis areas, use efficient analytical approaches, and maintain transparency about trade-offs between speed and thoroughness.",
            },
        ],
    ),
    (
        "DevOps Engineer",
        &[
            InterviewQuestion {
                question: "Explain the concept of Infrastructure as Code and its benefits.",
                ideal_answer: "Infrastructure as Code treats infrastructure configuration as software code, enabling version control, automated deployments, consistency across environments, easier scaling, and faster disaster recovery through reproducible infrastructure provisioning.",
            },
            InterviewQuestion {
                question: "How do you implement a CI/CD pipeline, and what are the key components?",
                ideal_answer: "I implement automated build triggers, code quality checks, testing stages, security scans, deployment automation, and monitoring. Key components include source control integration, build servers, artifact repositories, and deployment orchestration tools.",
            },
            InterviewQuestion {
                question: "Describe your experience with containerization technologies like Docker and Kubernetes.",
                ideal_answer: "Docker provides application containerization for consistent environments, while Kubernetes orchestrates containers at scale with features like service discovery, load balancing, auto-scaling, and self-healing capabilities for production workloads.",
            },
            InterviewQuestion {
                question: "How do you approach monitoring and alerting in a distributed system?",
                ideal_answer: "I implement comprehensive logging, metrics collection, distributed tracing, proactive alerting based on SLIs/SLOs, dashboard creation for visibility, and ensure alerts are actionable and don't create alert fatigue.",
            },
            InterviewQuestion {
                question: "What's your strategy for managing secrets and sensitive configuration data?",
                ideal_answer: "I use dedicated secret management tools, implement encryption at rest and in transit, follow least privilege principles, rotate secrets regularly, audit access, and ensure secrets are never stored in version control.",
            },
            InterviewQuestion {
                question: "How do you handle deployment rollbacks and disaster recovery?",
                ideal_answer: "I implement blue-green deployments, maintain rollback procedures, use infrastructure backup strategies, test disaster recovery plans regularly, maintain documentation, and ensure rapid recovery capabilities with minimal data loss.",
            },
            InterviewQuestion {
                question: "Describe your experience with cloud platforms and their services.",
                ideal_answer: "I work with AWS/Azure/GCP services for compute, storage, networking, and managed services. I focus on cost optimization, security best practices, multi-region deployments, and leveraging cloud-native solutions appropriately.",
            },
            InterviewQuestion {
                question: "How do you optimize application performance and infrastructure costs?",
                ideal_answer: "I monitor resource utilization, implement auto-scaling, optimize instance sizing, use reserved instances, implement caching strategies, review and eliminate unused resources, and continuously analyze cost-performance trade-offs.",
            },
            InterviewQuestion {
                question: "What's your approach to security in DevOps practices?",
                ideal_answer: "I integrate security into the pipeline with automated security testing, vulnerability scanning, compliance checks, secure coding practices, access controls, and security monitoring throughout the development lifecycle.",
            },
            InterviewQuestion {
                question: "How do you collaborate with development teams to improve deployment processes?",
                ideal_answer: "I work closely with developers to understand requirements, provide self-service tools, create documentation, offer training, gather feedback for process improvements, and ensure deployment processes are developer-friendly.",
            },
            InterviewQuestion {
                question: "Describe your experience with configuration management tools.",
                ideal_answer: "I use tools like Ansible, Chef, or Puppet for automated configuration management, ensuring consistency across environments, managing configuration drift, and maintaining idempotent operations for reliable infrastructure management.",
            },
            InterviewQuestion {
                question: "How do you handle scaling challenges in high-traffic applications?",
                ideal_answer: "I implement horizontal and vertical scaling strategies, use load balancers, implement caching layers, optimize database performance, use CDNs, and design for stateless applications to handle traffic spikes effectively.",
            },
            InterviewQuestion {
                question: "What's your approach to troubleshooting production issues?",
                ideal_answer: "I use systematic debugging approaches, leverage monitoring and logging tools, implement proper observability, maintain runbooks for common issues, coordinate with teams effectively, and focus on rapid issue resolution while preventing recurrence.",
            },
            InterviewQuestion {
                question: "How do you stay current with rapidly evolving DevOps tools and practices?",
                ideal_answer: "I follow industry blogs, participate in DevOps communities, attend conferences, experiment with new tools in non-production environments, maintain continuous learning habits, and evaluate tools based on practical business value.",
            },
            InterviewQuestion {
                question: "Describe a complex infrastructure problem you solved and your approach.",
                ideal_answer: "I would detail a specific technical challenge, explain the diagnostic process used, describe the solution implementation, highlight collaboration with stakeholders, and emphasize the positive outcomes and lessons learned.",
            },
        ],
    ),
    (
        "Cybersecurity Analyst",
        &[
            InterviewQuestion {
                question: "How do you stay current with the latest cybersecurity threats and vulnerabilities?",
                ideal_answer: "I follow threat intelligence feeds, subscribe to security bulletins, participate in cybersecurity communities, attend security conferences, maintain certifications, and regularly review CVE databases and security research publications.",
            },
            InterviewQuestion {
                question: "Describe your approach to incident response and how you would handle a suspected security breach.",
                ideal_answer: "I would immediately contain the threat, preserve evidence, assess the scope, notify stakeholders, conduct thorough investigation, implement remediation measures, document lessons learned, and update security procedures to prevent recurrence.",
            },
            InterviewQuestion {
                question: "How do you perform risk assessments and what factors do you consider?",
                ideal_answer: "I identify assets, assess threats and vulnerabilities, evaluate likelihood and impact, calculate risk levels, prioritize remediation efforts, consider business context, and provide actionable recommendations with cost-benefit analysis.",
            },
            InterviewQuestion {
                question: "Explain your experience with security monitoring tools and SIEM systems.",
                ideal_answer: "I configure and manage SIEM solutions, create custom detection rules, analyze security logs, correlate events across systems, investigate alerts, tune systems to reduce false positives, and generate meaningful security reports.",
            },
            InterviewQuestion {
                question: "How do you approach vulnerability management in an organization?",
                ideal_answer: "I implement regular vulnerability scanning, prioritize based on risk and exploitability, coordinate with system owners for patching, track remediation progress, maintain vulnerability databases, and ensure compliance with security policies.",
            },
            InterviewQuestion {
                question: "Describe your understanding of network security and how you would secure network infrastructure.",
                ideal_answer: "I implement network segmentation, configure firewalls and intrusion prevention systems, monitor network traffic, implement access controls, use VPNs for remote access, and regularly assess network security posture.",
            },
            InterviewQuestion {
                question: "How do you conduct security awareness training and promote security culture?",
                ideal_answer: "I develop relevant training content, use real-world examples, conduct phishing simulations, provide regular updates on threats, make training engaging and interactive, and measure effectiveness through metrics and feedback.",
            },
            InterviewQuestion {
                question: "What's your approach to penetration testing and security assessments?",
                ideal_answer: "I follow structured methodologies, obtain proper authorization, use appropriate tools, document findings thoroughly, provide clear remediation guidance, and work collaboratively with teams to improve security posture.",
            },
            InterviewQuestion {
                question: "How do you handle false positives in security monitoring and maintain analyst efficiency?",
                ideal_answer: "I analyze patterns in false positives, tune detection rules, implement whitelist exceptions where appropriate, automate routine tasks, provide analyst training, and continuously improve detection accuracy.",
            },
            InterviewQuestion {
                question: "Describe your experience with compliance frameworks and security standards.",
                ideal_answer: "I understand frameworks like NIST, ISO 27001, and industry-specific regulations, implement controls mapping, conduct compliance assessments, maintain documentation, and ensure continuous compliance monitoring.",
            },
            InterviewQuestion {
                question: "How do you investigate and analyze malware or suspicious files?",
                ideal_answer: "I use isolated sandbox environments, employ static and dynamic analysis techniques, leverage threat intelligence, document indicators of compromise, coordinate with antivirus vendors, and share findings with security community.",
            },
            InterviewQuestion {
                question: "What's your approach to securing cloud environments and understanding shared responsibility models?",
                ideal_answer: "I understand cloud provider responsibilities versus customer responsibilities, implement proper IAM controls, configure security groups, enable logging and monitoring, and ensure data encryption and compliance requirements.",
            },
            InterviewQuestion {
                question: "How do you balance security requirements with business operational needs?",
                ideal_answer: "I collaborate with business stakeholders, understand operational requirements, provide risk-based recommendations, implement proportionate controls, communicate security impact clearly, and find solutions that meet both security and business needs.",
            },
            InterviewQuestion {
                question: "Describe your experience with digital forensics and evidence preservation.",
                ideal_answer: "I follow proper chain of custody procedures, use forensically sound tools, maintain evidence integrity, document all actions thoroughly, work with legal teams when necessary, and ensure admissibility of evidence.",
            },
            InterviewQuestion {
                question: "How do you approach threat hunting and proactive security monitoring?",
                ideal_answer: "I use threat intelligence to guide hunting activities, develop hypotheses about potential threats, create custom detection queries, analyze behavioral patterns, and continuously improve detection capabilities based on findings.",
            },
        ],
    ),
    (
        "Solution Architect",
        &[
            InterviewQuestion {
                question: "How do you approach designing a scalable system architecture for a new application?",
                ideal_answer: "I start by understanding business requirements, analyze expected load and growth patterns, design for horizontal scalability, implement proper caching strategies, choose appropriate databases, and ensure the architecture can evolve with changing needs.",
            },
            InterviewQuestion {
                question: "Describe your process for evaluating and selecting technologies for a project.",
                ideal_answer: "I assess technical requirements, evaluate technology maturity and community support, consider team expertise, analyze long-term maintenance implications, conduct proof-of-concepts when needed, and balance innovation with proven reliability.",
            },
            InterviewQuestion {
                question: "How do you ensure security and compliance are integrated into your architectural designs?",
                ideal_answer: "I implement security by design principles, incorporate authentication and authorization at multiple layers, ensure data encryption, follow compliance requirements, conduct security reviews, and maintain defense-in-depth strategies.",
            },
            InterviewQuestion {
                question: "Explain your approach to designing microservices architecture and when you would choose it over monolithic architecture.",
                ideal_answer: "Microservices offer independent scaling, technology diversity, and team autonomy but add complexity. I choose them for large teams, diverse requirements, and when benefits outweigh operational overhead, considering organizational readiness.",
            },
            InterviewQuestion {
                question: "How do you handle data architecture and ensure data consistency across distributed systems?",
                ideal_answer: "I design appropriate data models, implement proper transaction boundaries, use event-driven patterns for eventual consistency, design for data locality, and implement monitoring to detect and resolve data inconsistencies.",
            },
            InterviewQuestion {
                question: "Describe your experience with cloud architecture and multi-cloud strategies.",
                ideal_answer: "I design cloud-native solutions leveraging managed services, implement disaster recovery across regions, consider cost optimization, avoid vendor lock-in where appropriate, and ensure proper governance and security controls.",
            },
            InterviewQuestion {
                question: "How do you communicate complex technical concepts to non-technical stakeholders?",
                ideal_answer: "I use visual diagrams, relate technical concepts to business outcomes, avoid jargon, provide concrete examples, focus on benefits and risks, and ensure stakeholders understand implications for decision-making.",
            },
            InterviewQuestion {
                question: "What's your approach to performance optimization and ensuring system reliability?",
                ideal_answer: "I design with performance requirements in mind, implement comprehensive monitoring, use caching strategies, optimize database queries, design for fault tolerance, and establish SLAs with proper alerting mechanisms.",
            },
            InterviewQuestion {
                question: "How do you manage technical debt while delivering new features?",
                ideal_answer: "I document technical debt clearly, prioritize based on business impact, allocate time for refactoring, communicate debt implications to stakeholders, and balance new feature development with architectural improvements.",
            },
            InterviewQuestion {
                question: "Describe your process for conducting architecture reviews and ensuring quality.",
                ideal_answer: "I establish review criteria, involve relevant stakeholders, assess against non-functional requirements, evaluate long-term maintainability, document decisions and trade-offs, and ensure alignment with organizational standards.",
            },
            InterviewQuestion {
                question: "How do you approach integration architecture when connecting multiple systems?",
                ideal_answer: "I analyze integration patterns, choose appropriate messaging protocols, design for loose coupling, implement proper error handling, ensure data transformation capabilities, and plan for system evolution and versioning.",
            },
            InterviewQuestion {
                question: "What's your strategy for capacity planning and resource optimization?",
                ideal_answer: "I analyze usage patterns, model growth projections, implement auto-scaling capabilities, monitor resource utilization, optimize costs through right-sizing, and plan for both expected and unexpected load changes.",
            },
            InterviewQuestion {
                question: "How do you ensure your architectural decisions support business agility and time-to-market?",
                ideal_answer: "I design modular systems enabling independent development, implement CI/CD pipelines, choose technologies that accelerate development, ensure proper abstraction layers, and balance flexibility with simplicity.",
            },
            InterviewQuestion {
                question: "Describe your experience with API design and management strategies.",
                ideal_answer: "I design RESTful APIs following best practices, implement proper versioning strategies, ensure comprehensive documentation, implement rate limiting and security controls, and plan for API lifecycle management.",
            },
            InterviewQuestion {
                question: "How do you stay current with emerging technologies and evaluate their potential impact?",
                ideal_answer: "I follow technology trends, participate in architecture communities, conduct experimental projects, evaluate technology fit for organizational context, and balance innovation adoption with risk management.",
            },
        ],
    ),
    (
        "Data Scientist",
        &[
            InterviewQuestion {
                question: "Walk me through your process for approaching a new data science project from start to finish.",
                ideal_answer: "I start by understanding the business problem, exploring and cleaning the data, conducting exploratory data analysis, selecting appropriate algorithms, building and validating models, interpreting results, and deploying solutions with proper monitoring.",
            },
            InterviewQuestion {
                question: "How do you handle missing data and outliers in your datasets?",
                ideal_answer: "I analyze patterns in missing data, choose appropriate imputation methods or removal strategies, investigate outliers to determine if they're errors or valid extreme values, and document all decisions with their potential impact on model performance.",
            },
            InterviewQuestion {
                question: "Explain the bias-variance tradeoff and how it affects model selection.",
                ideal_answer: "Bias-variance tradeoff balances model complexity. High bias means underfitting, high variance means overfitting. I use techniques like cross-validation to find the optimal balance, ensuring models generalize well to new data.",
            },
            InterviewQuestion {
                question: "How do you evaluate the performance of a machine learning model?",
                ideal_answer: "I choose appropriate metrics based on the problem type, use cross-validation for robust evaluation, assess model performance on hold-out test sets, analyze confusion matrices, and consider business-relevant metrics beyond statistical measures.",
            },
            InterviewQuestion {
                question: "Describe your experience with feature engineering and selection techniques.",
                ideal_answer: "I create meaningful features from raw data, use domain knowledge for feature creation, apply statistical methods for feature selection, implement dimensionality reduction when appropriate, and validate feature importance through model interpretation.",
            },
            InterviewQuestion {
                question: "How do you communicate complex analytical findings to business stakeholders?",
                ideal_answer: "I focus on business impact, use clear visualizations, avoid technical jargon, provide actionable insights, quantify uncertainty, and tailor presentations to the audience's technical background and decision-making needs.",
            },
            InterviewQuestion {
                question: "What's your approach to model deployment and monitoring in production?",
                ideal_answer: "I implement proper model versioning, monitor model performance and data drift, set up alerting for performance degradation, plan for model retraining, and ensure seamless integration with existing business processes.",
            },
            InterviewQuestion {
                question: "How do you ensure reproducibility in your data science work?",
                ideal_answer: "I use version control for code and data, maintain detailed documentation, create reproducible environments, use random seeds, implement automated pipelines, and follow consistent project structure and naming conventions.",
            },
            InterviewQuestion {
                question: "Describe your experience with deep learning and when you would choose it over traditional methods.",
                ideal_answer: "Deep learning excels with large datasets, complex patterns, and unstructured data like images or text. I choose it when traditional methods underperform, sufficient data is available, and computational resources can support training requirements.",
            },
            InterviewQuestion {
                question: "How do you handle imbalanced datasets in classification problems?",
                ideal_answer: "I use techniques like resampling, SMOTE, cost-sensitive learning, ensemble methods, and appropriate evaluation metrics like precision-recall curves rather than accuracy alone, depending on the specific business context.",
            },
            InterviewQuestion {
                question: "What's your approach to A/B testing and experimental design in data science?",
                ideal_answer: "I design proper randomization, calculate appropriate sample sizes, control for confounding variables, ensure statistical power, analyze results with proper statistical tests, and interpret practical significance alongside statistical significance.",
            },
            InterviewQuestion {
                question: "How do you stay current with the rapidly evolving field of data science?",
                ideal_answer: "I follow research publications, participate in online courses, engage with data science communities, attend conferences, work on personal projects with new techniques, and continuously evaluate emerging tools and methodologies.",
            },
            InterviewQuestion {
                question: "Describe a challenging data science project you worked on and how you overcame obstacles.",
                ideal_answer: "I would detail a specific project, explain the technical and business challenges, describe the analytical approach and methodologies used, highlight innovative solutions implemented, and emphasize the business impact achieved.",
            },
            InterviewQuestion {
                question: "How do you approach ethical considerations in data science and machine learning?",
                ideal_answer: "I consider bias in data and algorithms, ensure privacy protection, implement fairness measures, maintain transparency in model decisions, comply with regulations, and regularly audit models for unintended discriminatory effects.",
            },
            InterviewQuestion {
                question: "What's your experience with big data technologies and when do you use them?",
                ideal_answer: "I use technologies like Spark, Hadoop, or cloud-based solutions when data volume exceeds single-machine capabilities, when distributed processing provides significant performance benefits, or when real-time processing requirements demand scalable solutions.",
            },
        ],
    ),
    (
        "Cloud Architect",
        &[
            InterviewQuestion {
                question: "How do you design a cloud architecture that balances cost optimization with performance requirements?",
                ideal_answer: "I analyze workload patterns, implement auto-scaling, choose appropriate instance types, use reserved instances for predictable workloads, implement efficient storage strategies, monitor costs continuously, and optimize based on actual usage patterns.",
            },
            InterviewQuestion {
                question: "Describe your approach to implementing security best practices in cloud environments.",
                ideal_answer: "I implement identity and access management, network security controls, data encryption, regular security assessments, compliance monitoring, shared responsibility model understanding, and security automation for consistent protection.",
            },
            InterviewQuestion {
                question: "How do you handle disaster recovery and business continuity in cloud architectures?",
                ideal_answer: "I design multi-region deployments, implement automated backups, create recovery procedures, test disaster recovery regularly, calculate RTO and RPO requirements, and ensure data replication strategies meet business needs.",
            },
            InterviewQuestion {
                question: "Explain your strategy for cloud migration and what factors you consider.",
                ideal_answer: "I assess current infrastructure, analyze application dependencies, choose appropriate migration patterns (rehost, refactor, rebuild), plan for minimal downtime, address security and compliance, and implement proper testing and rollback procedures.",
            },
            InterviewQuestion {
                question: "How do you implement monitoring and observability in distributed cloud systems?",
                ideal_answer: "I use cloud-native monitoring tools, implement distributed tracing, create comprehensive dashboards, set up proactive alerting, monitor key performance indicators, and ensure visibility across all system components.",
            },
            InterviewQuestion {
                question: "Describe your experience with Infrastructure as Code and its benefits.",
                ideal_answer: "IaC enables version control, automated deployments, consistent environments, faster provisioning, and reduced human error. I use tools like Terraform or CloudFormation to implement reproducible infrastructure deployments.",
            },
            InterviewQuestion {
                question: "How do you approach multi-cloud or hybrid cloud strategies?",
                ideal_answer: "I assess business requirements, avoid vendor lock-in, leverage best-of-breed services, implement consistent management approaches, ensure proper connectivity, and balance complexity with strategic benefits.",
            },
            InterviewQuestion {
                question: "What's your approach to implementing DevOps practices in cloud environments?",
                ideal_answer: "I implement CI/CD pipelines, automate infrastructure provisioning, enable self-service capabilities, implement monitoring and feedback loops, promote collaboration between teams, and ensure rapid, reliable deployments.",
            },
            InterviewQuestion {
                question: "How do you handle data management and compliance in cloud architectures?",
                ideal_answer: "I implement proper data classification, ensure encryption at rest and in transit, manage data residency requirements, implement access controls, maintain audit trails, and ensure compliance with relevant regulations.",
            },
            InterviewQuestion {
                question: "Describe your experience with containerization and orchestration in cloud environments.",
                ideal_answer: "I use containers for application portability, implement Kubernetes for orchestration, manage container registries, implement service mesh for communication, and leverage cloud-managed container services for operational efficiency.",
            },
            InterviewQuestion {
                question: "How do you design for scalability and elasticity in cloud architectures?",
                ideal_answer: "I implement horizontal scaling, use load balancers, design stateless applications, implement caching strategies, use managed services for automatic scaling, and monitor performance to optimize scaling policies.",
            },
            InterviewQuestion {
                question: "What's your approach to network design and connectivity in cloud environments?",
                ideal_answer: "I design secure network topologies, implement proper subnetting, configure VPNs for hybrid connectivity, use content delivery networks, implement network security controls, and optimize for performance and cost.",
            },
            InterviewQuestion {
                question: "How do you evaluate and select appropriate cloud services for specific requirements?",
                ideal_answer: "I assess technical requirements, evaluate service capabilities, consider cost implications, analyze vendor lock-in risks, review SLA commitments, and conduct proof-of-concepts for critical services.",
            },
            InterviewQuestion {
                question: "Describe your approach to cloud governance and cost management.",
                ideal_answer: "I implement tagging strategies, use cost monitoring tools, set up budget alerts, implement resource policies, conduct regular cost reviews, optimize resource utilization, and establish governance frameworks.",
            },
            InterviewQuestion {
                question: "How do you stay current with rapidly evolving cloud technologies and services?",
                ideal_answer: "I follow cloud provider announcements, participate in cloud communities, maintain certifications, attend conferences, experiment with new services, and evaluate emerging technologies for practical applications.",
            },
        ],
    ),
    (
        "Product Manager (Tech)",
        &[
            InterviewQuestion {
                question: "How do you prioritize features when you have limited development resources?",
                ideal_answer: "I use frameworks like RICE or MoSCoW, assess business impact and user value, consider technical feasibility, analyze customer feedback and data, align with strategic goals, and communicate priorities clearly to stakeholders.",
            },
            InterviewQuestion {
                question: "Describe your process for gathering and analyzing user requirements.",
                ideal_answer: "I conduct user interviews, analyze usage data, create user personas, map user journeys, gather stakeholder input, validate assumptions through prototypes, and document requirements with clear acceptance criteria.",
            },
            InterviewQuestion {
                question: "How do you work with engineering teams to estimate and plan development work?",
                ideal_answer: "I provide clear requirements, participate in sprint planning, understand technical constraints, facilitate communication between teams, help with scope refinement, and ensure alignment between business goals and technical implementation.",
            },
            InterviewQuestion {
                question: "Explain your approach to product metrics and how you measure success.",
                ideal_answer: "I define clear KPIs aligned with business objectives, implement analytics tracking, monitor user engagement and retention, conduct A/B tests, analyze conversion funnels, and use data to inform product decisions.",
            },
            InterviewQuestion {
                question: "How do you handle conflicting requirements from different stakeholders?",
                ideal_answer: "I facilitate discussions to understand underlying needs, present data-driven analysis, seek common ground, escalate when necessary, communicate trade-offs clearly, and ensure decisions align with product strategy.",
            },
            InterviewQuestion {
                question: "Describe your experience with agile development methodologies and how you contribute.",
                ideal_answer: "I participate in ceremonies, maintain the product backlog, provide clarification during development, conduct sprint reviews, gather feedback for continuous improvement, and ensure team alignment with product goals.",
            },
            InterviewQuestion {
                question: "How do you conduct market research and competitive analysis?",
                ideal_answer: "I analyze competitor features and strategies, study market trends, conduct customer surveys, research industry reports, identify market opportunities, and use insights to inform product strategy and positioning.",
            },
            InterviewQuestion {
                question: "What's your approach to product roadmapping and long-term planning?",
                ideal_answer: "I align roadmaps with business strategy, balance short-term needs with long-term vision, incorporate stakeholder input, communicate timelines and dependencies, and maintain flexibility for changing priorities.",
            },
            InterviewQuestion {
                question: "How do you collaborate with UX/UI designers to create user-centered products?",
                ideal_answer: "I share user research insights, participate in design reviews, provide business context, ensure designs meet requirements, facilitate user testing, and maintain focus on user experience throughout development.",
            },
            InterviewQuestion {
                question: "Describe your experience with product launches and go-to-market strategies.",
                ideal_answer: "I coordinate cross-functional teams, develop launch plans, create training materials, support marketing efforts, monitor launch metrics, gather post-launch feedback, and iterate based on market response.",
            },
            InterviewQuestion {
                question: "How do you handle technical debt discussions with engineering teams?",
                ideal_answer: "I understand the business impact of technical debt, work with engineering to prioritize critical debt, communicate implications to stakeholders, balance debt reduction with feature development, and advocate for sustainable development practices.",
            },
            InterviewQuestion {
                question: "What's your approach to user testing and validation of product concepts?",
                ideal_answer: "I design appropriate testing methods, recruit representative users, create realistic test scenarios, gather both qualitative and quantitative feedback, analyze results objectively, and iterate based on findings.",
            },
            InterviewQuestion {
                question: "How do you manage product documentation and ensure team alignment?",
                ideal_answer: "I maintain clear product requirements documents, create user stories with acceptance criteria, keep stakeholders informed through regular updates, use collaboration tools effectively, and ensure documentation stays current.",
            },
            InterviewQuestion {
                question: "Describe a time when you had to pivot a product strategy based on new information.",
                ideal_answer: "I would detail a specific situation, explain the new information that prompted the change, describe the decision-making process, communicate how I managed stakeholder expectations, and highlight the positive outcomes achieved.",
            },
            InterviewQuestion {
                question: "How do you balance innovation with maintaining existing product functionality?",
                ideal_answer: "I allocate resources between innovation and maintenance, understand customer expectations, assess risk of new features, maintain product stability, communicate value of both approaches, and ensure sustainable product evolution.",
            },
        ],
    ),
    (
        "Engineering Manager",
        &[
            InterviewQuestion {
                question: "How do you balance technical leadership with people management responsibilities?",
                ideal_answer: "I maintain technical depth through code reviews and architecture discussions while dedicating time to one-on-ones, team development, and strategic planning. I ensure both technical excellence and team growth are prioritized appropriately.",
            },
            InterviewQuestion {
                question: "Describe your approach to hiring and building high-performing engineering teams.",
                ideal_answer: "I define role requirements clearly, use structured interviews, assess both technical skills and cultural fit, focus on diversity and inclusion, onboard new hires effectively, and create environments where team members can thrive.",
            },
            InterviewQuestion {
                question: "How do you handle performance management and career development for your team members?",
                ideal_answer: "I conduct regular one-on-ones, set clear expectations and goals, provide constructive feedback, create growth opportunities, address performance issues early, and support individual career aspirations within team needs.",
            },
            InterviewQuestion {
                question: "Explain your strategy for managing technical debt while delivering business requirements.",
                ideal_answer: "I work with stakeholders to communicate technical debt impact, allocate time for refactoring, prioritize debt that affects velocity, implement gradual improvements, and ensure sustainable development practices.",
            },
            InterviewQuestion {
                question: "How do you facilitate effective communication between engineering and other departments?",
                ideal_answer: "I translate technical concepts for non-technical stakeholders, participate in cross-functional planning, establish clear communication channels, set realistic expectations, and ensure alignment between technical and business goals.",
            },
            InterviewQuestion {
                question: "Describe your approach to sprint planning and agile project management.",
                ideal_answer: "I facilitate planning meetings, help estimate work accurately, remove blockers, monitor progress, adjust scope when needed, and ensure sustainable development pace while maintaining quality standards.",
            },
            InterviewQuestion {
                question: "How do you handle conflicts within your engineering team?",
                ideal_answer: "I address conflicts promptly, listen to all perspectives, facilitate open discussion, focus on solutions rather than blame, establish clear guidelines, and create an environment of mutual respect and collaboration.",
            },
            InterviewQuestion {
                question: "What's your strategy for keeping your team motivated and engaged?",
                ideal_answer: "I provide challenging work opportunities, recognize achievements, support professional development, maintain transparent communication, create psychological safety, and ensure work-life balance for sustainable performance.",
            },
            InterviewQuestion {
                question: "How do you approach technical decision-making and architecture reviews?",
                ideal_answer: "I facilitate collaborative discussions, ensure diverse perspectives are heard, consider long-term implications, document decisions and rationale, and balance innovation with proven solutions based on team capabilities.",
            },
            InterviewQuestion {
                question: "Describe your experience with mentoring junior developers and knowledge sharing.",
                ideal_answer: "I provide structured mentoring, encourage pair programming, create learning opportunities, facilitate knowledge sharing sessions, promote code reviews as learning tools, and help junior developers build confidence and skills.",
            },
            InterviewQuestion {
                question: "How do you measure and improve team productivity and code quality?",
                ideal_answer: "I track meaningful metrics like delivery velocity and defect rates, implement code review processes, encourage testing practices, provide tooling for quality improvement, and focus on outcomes rather than just activity.",
            },
            InterviewQuestion {
                question: "What's your approach to managing remote or distributed engineering teams?",
                ideal_answer: "I establish clear communication protocols, use appropriate collaboration tools, maintain regular check-ins, ensure team cohesion through virtual team building, and adapt management practices for remote work effectiveness.",
            },
            InterviewQuestion {
                question: "How do you handle budget management and resource allocation for engineering projects?",
                ideal_answer: "I work with stakeholders to understand priorities, estimate resource requirements accurately, monitor spending, optimize tool and infrastructure costs, and communicate budget implications for technical decisions.",
            },
            InterviewQuestion {
                question: "Describe a challenging situation you faced as an engineering manager and how you resolved it.",
                ideal_answer: "I would detail a specific management challenge, explain the analysis and decision-making process, describe actions taken to address the situation, highlight collaboration with stakeholders, and emphasize positive outcomes achieved.",
            },
            InterviewQuestion {
                question: "How do you stay technically current while handling management responsibilities?",
                ideal_answer: "I allocate time for technical learning, participate in architecture discussions, review critical code, attend technical conferences, engage with the engineering community, and balance hands-on involvement with management duties.",
            },
        ],
    ),
    (
        "Chief Technology Officer",
        &[
            InterviewQuestion {
                question: "How do you align technology strategy with overall business objectives?",
                ideal_answer: "I work closely with executive leadership to understand business goals, translate them into technology initiatives, ensure technology investments support revenue growth, communicate technology impact to stakeholders, and maintain strategic alignment.",
            },
            InterviewQuestion {
                question: "Describe your approach to building and scaling technology organizations.",
                ideal_answer: "I assess organizational needs, design scalable team structures, implement effective hiring processes, create development pathways, establish technology standards, and build culture that supports both innovation and execution.",
            },
            InterviewQuestion {
                question: "How do you manage technology risk and ensure business continuity?",
                ideal_answer: "I implement comprehensive risk assessment processes, establish disaster recovery procedures, ensure data protection and security, maintain system redundancy, create incident response plans, and regularly test continuity procedures.",
            },
            InterviewQuestion {
                question: "What's your strategy for evaluating and adopting new technologies?",
                ideal_answer: "I assess technology fit with business needs, evaluate vendor stability and roadmaps, conduct proof-of-concepts, analyze total cost of ownership, consider organizational readiness, and implement gradual adoption strategies.",
            },
            InterviewQuestion {
                question: "How do you build and manage relationships with technology vendors and partners?",
                ideal_answer: "I establish strategic partnerships, negotiate favorable terms, maintain regular executive relationships, ensure vendor accountability, diversify vendor relationships to avoid dependencies, and leverage partnerships for competitive advantage.",
            },
            InterviewQuestion {
                question: "Describe your approach to cybersecurity and data protection strategy.",
                ideal_answer: "I implement comprehensive security frameworks, ensure compliance with regulations, establish security governance, invest in security tools and training, conduct regular assessments, and maintain incident response capabilities.",
            },
            InterviewQuestion {
                question: "How do you balance innovation with operational stability and cost management?",
                ideal_answer: "I allocate budgets between innovation and operations, implement portfolio management approaches, establish innovation frameworks, measure ROI on technology investments, and ensure sustainable innovation practices.",
            },
            InterviewQuestion {
                question: "What's your experience with digital transformation initiatives?",
                ideal_answer: "I lead comprehensive transformation planning, assess current state and desired outcomes, manage change management processes, ensure stakeholder buy-in, implement transformation in phases, and measure transformation success.",
            },
            InterviewQuestion {
                question: "How do you communicate technology decisions and strategies to the board and investors?",
                ideal_answer: "I translate technical concepts into business impact, present clear ROI analysis, communicate risks and mitigation strategies, provide regular progress updates, and ensure technology investments align with investor expectations.",
            },
            InterviewQuestion {
                question: "Describe your approach to talent acquisition and retention in competitive tech markets.",
                ideal_answer: "I develop compelling employer branding, offer competitive compensation packages, create growth opportunities, maintain positive company culture, implement retention strategies, and build strong engineering leadership teams.",
            },
            InterviewQuestion {
                question: "How do you handle technology due diligence for mergers, acquisitions, or investments?",
                ideal_answer: "I assess technical assets and liabilities, evaluate technology integration challenges, analyze scalability and security, estimate integration costs, identify synergies, and provide recommendations for technology strategy post-transaction.",
            },
            InterviewQuestion {
                question: "What's your strategy for managing technology budgets and demonstrating ROI?",
                ideal_answer: "I implement portfolio-based budgeting, track technology investments against business outcomes, establish clear metrics for ROI measurement, communicate value to stakeholders, and optimize spending for maximum business impact.",
            },
            InterviewQuestion {
                question: "How do you foster innovation culture while maintaining operational excellence?",
                ideal_answer: "I encourage experimentation within defined boundaries, allocate time for innovation projects, recognize innovative contributions, implement idea management processes, and balance creative freedom with business discipline.",
            },
            InterviewQuestion {
                question: "Describe your experience with scaling technology infrastructure for rapid business growth.",
                ideal_answer: "I plan for scalability requirements, implement cloud and automation strategies, design systems for elasticity, manage infrastructure costs, ensure performance under load, and build teams capable of supporting growth.",
            },
            InterviewQuestion {
                question: "How do you stay current with technology trends and assess their potential business impact?",
                ideal_answer: "I engage with industry networks, attend strategic conferences, maintain advisor relationships, conduct technology scouting, evaluate emerging trends, and assess potential disruption to business models.",
            },
        ],
    ),
    (
        "Tech Entrepreneur",
        &[
            InterviewQuestion {
                question: "How do you validate a technology business idea before significant investment?",
                ideal_answer: "I conduct market research, build minimum viable products, gather customer feedback, analyze competitor landscapes, test monetization models, validate product-market fit, and iterate based on real user data.",
            },
            InterviewQuestion {
                question: "Describe your approach to building and leading a founding team.",
                ideal_answer: "I identify complementary skills needed, recruit passionate individuals, establish clear roles and equity arrangements, create shared vision and values, implement decision-making processes, and maintain team motivation through challenges.",
            },
            InterviewQuestion {
                question: "How do you manage limited resources and prioritize development in a startup environment?",
                ideal_answer: "I focus on core value proposition, implement lean development practices, prioritize features based on customer impact, manage cash flow carefully, leverage cost-effective tools, and make data-driven decisions about resource allocation.",
            },
            InterviewQuestion {
                question: "What's your strategy for raising funding and communicating with investors?",
                ideal_answer: "I develop compelling business cases, prepare detailed financial projections, demonstrate traction and growth potential, build investor relationships, present clear value propositions, and maintain transparent communication throughout funding processes.",
            },
            InterviewQuestion {
                question: "How do you approach product development and iteration based on market feedback?",
                ideal_answer: "I implement agile development processes, gather continuous user feedback, analyze usage metrics, conduct user testing, iterate rapidly, maintain close customer relationships, and balance innovation with market needs.",
            },
            InterviewQuestion {
                question: "Describe your experience with scaling a technology business from startup to growth stage.",
                ideal_answer: "I would detail specific scaling challenges, explain strategies for team growth, describe technology infrastructure scaling, discuss market expansion approaches, and highlight key decisions that enabled successful scaling.",
            },
            InterviewQuestion {
                question: "How do you identify and evaluate market opportunities for technology ventures?",
                ideal_answer: "I analyze market size and growth trends, identify underserved segments, assess competitive landscapes, evaluate technology enablers, understand regulatory environments, and validate opportunity through customer research.",
            },
            InterviewQuestion {
                question: "What's your approach to building strategic partnerships and business development?",
                ideal_answer: "I identify strategic value creation opportunities, establish mutually beneficial partnerships, negotiate favorable terms, maintain partner relationships, leverage partnerships for growth, and integrate partnerships into business strategy.",
            },
            InterviewQuestion {
                question: "How do you handle the technical and business challenges of rapid scaling?",
                ideal_answer: "I plan for scalability early, implement robust technology architecture, build scalable business processes, hire ahead of needs, maintain quality standards, and ensure customer satisfaction during growth phases.",
            },
            InterviewQuestion {
                question: "Describe your approach to intellectual property strategy and protection.",
                ideal_answer: "I identify valuable IP assets, implement appropriate protection strategies, file patents where beneficial, protect trade secrets, ensure employee IP assignments, and develop IP licensing strategies for revenue generation.",
            },
            InterviewQuestion {
                question: "How do you build and maintain company culture during rapid growth?",
                ideal_answer: "I establish core values early, hire for cultural fit, implement consistent onboarding, maintain open communication, recognize achievements, adapt culture thoughtfully, and ensure leadership models desired behaviors.",
            },
            InterviewQuestion {
                question: "What's your strategy for customer acquisition and retention in competitive markets?",
                ideal_answer: "I identify target customer segments, develop compelling value propositions, implement cost-effective acquisition channels, focus on customer success, build retention strategies, and leverage customer advocacy for growth.",
            },
            InterviewQuestion {
                question: "How do you balance innovation with execution and operational excellence?",
                ideal_answer: "I allocate resources between innovation and operations, establish innovation processes, maintain focus on core business, implement quality standards, measure both innovation and operational metrics, and ensure sustainable growth.",
            },
            InterviewQuestion {
                question: "Describe a significant pivot or strategic change you made and the results.",
                ideal_answer: "I would detail the circumstances requiring change, explain the analysis and decision-making process, describe implementation challenges, highlight stakeholder communication, and emphasize positive outcomes achieved.",
            },
            InterviewQuestion {
                question: "How do you prepare for potential exit strategies while building the business?",
                ideal_answer: "I maintain clean financial records, build scalable operations, develop strong management teams, understand valuation drivers, maintain strategic options, and ensure business can operate independently of founders.",
            },
        ],
    ),
    (
        "IT Consultant",
        &[
            InterviewQuestion {
                question: "How do you approach assessing a client's current IT infrastructure and identifying improvement opportunities?",
                ideal_answer: "I conduct comprehensive audits, interview stakeholders, analyze current systems and processes, benchmark against best practices, identify pain points and inefficiencies, and provide prioritized recommendations with cost-benefit analysis.",
            },
            InterviewQuestion {
                question: "Describe your process for managing multiple client projects simultaneously.",
                ideal_answer: "I use project management tools, establish clear priorities, maintain detailed schedules, communicate regularly with clients, allocate resources effectively, and ensure quality standards are maintained across all engagements.",
            },
            InterviewQuestion {
                question: "How do you handle situations where a client requests solutions that you believe are not in their best interest?",
                ideal_answer: "I present alternative solutions with clear explanations, provide data-driven recommendations, explain potential risks and consequences, respect client autonomy while advocating for best practices, and document discussions thoroughly.",
            },
            InterviewQuestion {
                question: "What's your approach to staying current with emerging technologies while serving diverse client needs?",
                ideal_answer: "I maintain continuous learning habits, attend industry conferences, participate in professional networks, conduct technology evaluations, and assess new technologies for practical client applications and ROI potential.",
            },
            InterviewQuestion {
                question: "How do you establish credibility and build trust with new clients?",
                ideal_answer: "I demonstrate deep expertise, provide references and case studies, ask insightful questions, listen actively to understand their needs, deliver on initial commitments, and maintain transparent communication throughout engagements.",
            },
            InterviewQuestion {
                question: "Describe your experience with change management and helping organizations adopt new technologies.",
                ideal_answer: "I assess organizational readiness, develop change strategies, provide training and support, address resistance proactively, implement gradual rollouts, measure adoption success, and ensure sustainable change implementation.",
            },
            InterviewQuestion {
                question: "How do you scope projects and provide accurate estimates for consulting engagements?",
                ideal_answer: "I gather detailed requirements, break projects into phases, estimate effort based on experience, include contingency factors, clearly define scope boundaries, and communicate assumptions and dependencies upfront.",
            },
            InterviewQuestion {
                question: "What's your approach to knowledge transfer and ensuring clients can maintain solutions independently?",
                ideal_answer: "I create comprehensive documentation, provide hands-on training, establish support procedures, identify key personnel for knowledge transfer, implement gradual transition processes, and ensure client self-sufficiency.",
            },
            InterviewQuestion {
                question: "How do you handle budget constraints while still delivering value to clients?",
                ideal_answer: "I prioritize high-impact solutions, propose phased implementations, suggest cost-effective alternatives, leverage existing resources, focus on essential requirements, and clearly communicate trade-offs with budget decisions.",
            },
            InterviewQuestion {
                question: "Describe your experience with vendor selection and management for client projects.",
                ideal_answer: "I develop selection criteria, conduct thorough evaluations, manage RFP processes, negotiate favorable terms, oversee vendor performance, and ensure vendors meet client requirements and service levels.",
            },
            InterviewQuestion {
                question: "How do you ensure data security and compliance when working with sensitive client information?",
                ideal_answer: "I implement security protocols, use secure communication channels, follow data protection regulations, maintain confidentiality agreements, conduct security assessments, and ensure compliance with industry standards.",
            },
            InterviewQuestion {
                question: "What's your strategy for building long-term relationships with clients beyond individual projects?",
                ideal_answer: "I provide ongoing value, maintain regular communication, anticipate future needs, offer proactive recommendations, ensure client success, build relationships at multiple levels, and position myself as a trusted advisor.",
            },
            InterviewQuestion {
                question: "How do you handle disagreements or conflicts with client stakeholders?",
                ideal_answer: "I listen to understand different perspectives, facilitate open discussions, focus on common goals, present data-driven analysis, seek compromise solutions, escalate appropriately when needed, and maintain professional relationships.",
            },
            InterviewQuestion {
                question: "Describe a challenging consulting project and how you delivered successful outcomes.",
                ideal_answer: "I would detail the specific challenges faced, explain the analytical approach used, describe stakeholder management strategies, highlight innovative solutions implemented, and emphasize measurable results achieved for the client.",
            },
            InterviewQuestion {
                question: "How do you measure and demonstrate the value of your consulting services to clients?",
                ideal_answer: "I establish baseline metrics, define success criteria upfront, track progress regularly, measure ROI and business impact, gather client feedback, document case studies, and provide regular progress reports with tangible results.",
            },
        ],
    ),
    (
        "Freelance Developer",
        &[
            InterviewQuestion {
                question: "How do you manage multiple client projects and ensure timely delivery?",
                ideal_answer: "I use project management tools, establish clear priorities, maintain detailed schedules, communicate regularly with clients, set realistic deadlines, track progress consistently, and allocate buffer time for unexpected issues.",
            },
            InterviewQuestion {
                question: "Describe your process for scoping and pricing freelance development projects.",
                ideal_answer: "I gather detailed requirements, break projects into phases, estimate effort based on complexity, consider client budget constraints, include revision rounds, factor in testing time, and clearly communicate scope boundaries.",
            },
            InterviewQuestion {
                question: "How do you stay current with new technologies while maintaining productivity on client work?",
                ideal_answer: "I allocate time for learning, choose technologies strategically, experiment with new tools on personal projects, participate in developer communities, attend webinars, and gradually incorporate new skills into client work.",
            },
            InterviewQuestion {
                question: "What's your approach to client communication and managing expectations?",
                ideal_answer: "I establish clear communication schedules, provide regular progress updates, set realistic expectations upfront, document decisions and changes, respond promptly to inquiries, and maintain professional transparency throughout projects.",
            },
            InterviewQuestion {
                question: "How do you handle scope creep and change requests from clients?",
                ideal_answer: "I document original scope clearly, explain impact of changes, provide estimates for additional work, maintain professional boundaries, offer alternatives when possible, and ensure changes are approved before implementation.",
            },
            InterviewQuestion {
                question: "Describe your experience with remote collaboration and client relationships.",
                ideal_answer: "I use effective communication tools, establish regular check-ins, maintain detailed documentation, build trust through consistent delivery, adapt to client time zones, and create efficient workflows for remote collaboration.",
            },
            InterviewQuestion {
                question: "How do you ensure code quality and maintainability when working independently?",
                ideal_answer: "I follow coding standards, implement testing practices, document code thoroughly, use version control, conduct self-code reviews, follow best practices, and ensure code is readable for future maintenance.",
            },
            InterviewQuestion {
                question: "What's your strategy for finding and attracting new clients?",
                ideal_answer: "I maintain a strong portfolio, leverage professional networks, ask for referrals, participate in online communities, optimize my online presence, provide excellent service for repeat business, and showcase successful projects.",
            },
            InterviewQuestion {
                question: "How do you handle technical challenges when you don't have a team to collaborate with?",
                ideal_answer: "I research solutions thoroughly, consult online resources and documentation, engage with developer communities, ask for help when needed, experiment with different approaches, and maintain a network of peer developers.",
            },
            InterviewQuestion {
                question: "Describe your approach to testing and quality assurance as a solo developer.",
                ideal_answer: "I implement unit testing, conduct thorough manual testing, use automated testing tools, test across different environments, validate requirements systematically, and ensure robust error handling and user experience.",
            },
            InterviewQuestion {
                question: "How do you manage the business aspects of freelancing alongside development work?",
                ideal_answer: "I maintain organized records, handle invoicing promptly, track time accurately, manage taxes and finances, maintain contracts and agreements, allocate time for business development, and separate business and development tasks.",
            },
            InterviewQuestion {
                question: "What's your experience with different types of client relationships and project structures?",
                ideal_answer: "I work with various client types from startups to enterprises, adapt to different project methodologies, handle both short-term and long-term engagements, work within team structures, and maintain flexibility in collaboration approaches.",
            },
            InterviewQuestion {
                question: "How do you handle situations where a client is unsatisfied with your work?",
                ideal_answer: "I listen carefully to understand concerns, review work against original requirements, offer to make necessary corrections, communicate solutions clearly, learn from feedback, and maintain professionalism while resolving issues.",
            },
            InterviewQuestion {
                question: "Describe your most challenging freelance project and how you overcame obstacles.",
                ideal_answer: "I would detail specific technical or communication challenges, explain problem-solving approaches used, describe how I maintained client relationships, highlight innovative solutions implemented, and emphasize successful project completion.",
            },
            InterviewQuestion {
                question: "How do you balance work-life integration and maintain productivity as a freelance developer?",
                ideal_answer: "I establish clear boundaries, maintain consistent schedules, create dedicated workspace, take regular breaks, manage client expectations about availability, prioritize health and well-being, and develop sustainable work habits.",
            },
        ],
    ),
];

/// Questions for `role`, or `None` when the role has no bank.
pub fn questions_for(role: &str) -> Option<&'static [InterviewQuestion]> {
    QUESTION_BANK
        .iter()
        .find(|(title, _)| *title == role)
        .map(|(_, questions)| *questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::CareerCatalog;

    const QUESTIONS_PER_ROLE: usize = 15;

    #[test]
    fn test_every_career_has_a_bank() {
        let catalog = CareerCatalog::builtin().unwrap();
        for profile in catalog.profiles() {
            let questions = questions_for(&profile.title)
                .unwrap_or_else(|| panic!("no questions for {}", profile.title));
            assert_eq!(questions.len(), QUESTIONS_PER_ROLE, "{}", profile.title);
        }
        assert_eq!(QUESTION_BANK.len(), catalog.len());
    }

    #[test]
    fn test_questions_are_unique_within_a_role() {
        for (role, questions) in QUESTION_BANK {
            let mut seen: Vec<&str> = questions.iter().map(|q| q.question).collect();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), questions.len(), "{role} repeats a question");
        }
    }

    #[test]
    fn test_unknown_role_has_no_bank() {
        assert!(questions_for("Astronaut").is_none());
    }

    #[test]
    fn test_no_blank_entries() {
        for (role, questions) in QUESTION_BANK {
            for q in *questions {
                assert!(!q.question.trim().is_empty(), "{role}");
                assert!(!q.ideal_answer.trim().is_empty(), "{role}");
            }
        }
    }
}
