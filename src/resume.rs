//! Static resume record rendered by the profile view.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resume {
    pub personal: PersonalInfo,
    pub about: &'static str,
    pub skills: &'static [SkillGroup],
    pub experience: &'static [Job],
    pub projects: &'static [Project],
    pub education: &'static [Education],
    pub languages: &'static [SpokenLanguage],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    /// GitHub login.
    pub github: &'static str,
    /// LinkedIn display name.
    pub linkedin: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Education {
    pub institution: &'static str,
    pub degree: Option<&'static str>,
    pub field: &'static str,
    pub period: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpokenLanguage {
    pub language: &'static str,
    pub level: &'static str,
}

impl PersonalInfo {
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const RESUME: Resume = Resume {
    personal: PersonalInfo {
        name: "David Bucur",
        title: "Software Developer",
        email: "dbucur22@gmail.com",
        github: "bucurdavid",
        linkedin: "David Bucur",
    },

    about: "Software Engineer with experience in full-stack development. Focused on seamless integration between software layers and continuously expanding my expertise in best development practices, testing methodologies, and various technologies to deliver effective solutions.",

    skills: &[
        SkillGroup {
            category: "languages",
            items: &["Rust", "TypeScript", "JavaScript", "Python", "C#", "SQL"],
        },
        SkillGroup {
            category: "frameworks",
            items: &["NodeJS", "ReactJS", "NestJS", "NextJS", ".NET"],
        },
        SkillGroup {
            category: "tools",
            items: &["MySQL", "PostgreSQL", "MongoDB"],
        },
        SkillGroup {
            category: "platforms",
            items: &["AWS", "Microsoft Azure"],
        },
        SkillGroup {
            category: "soft skills",
            items: &["Adaptability", "Problem-solving", "Self-Awareness", "Time Management"],
        },
    ],

    experience: &[
        Job {
            title: "Software Developer",
            company: "Itheum",
            location: "Remote",
            period: "Nov 2022 — Present",
            description: "In my current role, my primary focus is on developing highly efficient and secure smart contracts and ensuring their optimal performance through rigorous testing. Additionally, I am responsible for building micro services that facilitate seamless communication between the front-end layer and the blockchain layer, with a specific focus on interoperability between smart contracts.",
            skills: &["Rust", "TypeScript", "NodeJS", "Smart Contracts", "Blockchain"],
        },
        Job {
            title: "Web Scrapper",
            company: "Rubrikk Group AS",
            location: "Cluj-Napoca",
            period: "Apr 2022 — Nov 2022",
            description: "I was a member of the Big Data team where I utilized Regular Expressions and XPath to create and maintain web crawlers. I also gained experience with SQL queries in BigQuery and worked directly with the C# and .NET framework to develop tools.",
            skills: &[
                "Google BigQuery",
                "Microsoft Azure",
                ".NET Framework",
                "C#",
                "Regular Expressions",
                "XPath",
            ],
        },
    ],

    projects: &[
        Project {
            title: "Solana smart contract development",
            date: "Jul 2024",
            description: "Contributed to several projects focused on smart contract development on the Solana blockchain. In these roles, I was responsible for designing and implementing smart contracts.",
            technologies: &["Rust", "Solana Blockchain"],
            url: None,
        },
        Project {
            title: "Liquid staking smart contract",
            date: "Apr 2024",
            description: "The solution involved building a smart contract for a liquid staking protocol, where users deposited tokens and received receipt tokens in return. These receipt tokens represented their staked position and automatically accrued value from staking rewards. Since the receipt tokens followed standard token interfaces, users could utilize them across DeFi applications while their original assets remained staked.",
            technologies: &["Rust", "MultiversX Blockchain"],
            url: None,
        },
        Project {
            title: "NFT Ticketing system - SAGA Festival",
            date: "Jun 2023",
            description: "Contributed to the development of a software solution aimed at enhancing festival experiences through the utilization of non-fungible tokens (NFTs). Played a key role in designing and implementing a secure smart contract that met the client's requirements.",
            technologies: &["Rust", "NestJS", "MySQL", "MultiversX Blockchain"],
            url: Some("https://linktr.ee/sagafestivalNFT"),
        },
        Project {
            title: "Dex metrics API",
            date: "Apr 2023",
            description: "Developed a back-end system to track all trades executed within a smart contract, providing comprehensive metrics and analysis on tokens and trading volumes. Implemented a REST API adhering to CoinGecko's standards.",
            technologies: &["NestJS", "PostgreSQL", "TypeScript", "MultiversX Blockchain"],
            url: Some("https://swap.onedex.app/analytics"),
        },
    ],

    education: &[
        Education {
            institution: "Technical University of Cluj-Napoca",
            degree: Some("Bachelor of Engineering in Technology and Telecommunications Systems"),
            field: "Electronics, Telecommunications and Information Technology",
            period: "Oct 2019 — Jul 2023",
            location: "Cluj-Napoca",
        },
        Education {
            institution: "National College \"Simion Bărnuțiu\"",
            degree: None,
            field: "Mathematics and Informatics",
            period: "Sep 2015 — Jun 2019",
            location: "Simleu Silvaniei",
        },
    ],

    languages: &[
        SpokenLanguage {
            language: "Romanian",
            level: "Native speaker",
        },
        SpokenLanguage {
            language: "English",
            level: "Highly proficient",
        },
    ],
};
