use crate::types::SkillRow;

/// GitHub account whose repositories populate the Projects page.
/// Overridable via config file or `--user`.
pub const DEFAULT_USERNAME: &str = "mhommet";

pub const PORTFOLIO_TITLE: &str = "Welcome to my portfolio - Milan Hommet";

/// Menu sections in display order. "Exit" must stay last.
pub const SECTIONS: [&str; 7] = [
    "About Me",
    "Education",
    "Experience",
    "Skills",
    "Projects",
    "Contact",
    "Exit",
];

pub const ABOUT: &str = "I'm a software developer based in France, specializing in software and mobile \
development but I'm also interested in game development.\n\
I'm currently pursuing an MBA in development and management. I like to learn new \
languages and frameworks in my free time.\n\
I have a work-study contract at Téïcée as a backend developer.";

pub const EDUCATION: &str = "2023 - 2025 : Master degree - Fullstack developer\n\
2022 - 2023 : Bachelor degree - Web developer\n\
2020 - 2022 : BTEC Higher National Diploma - web and software development";

pub const EXPERIENCE: &str = "2022 - today : Fullstack Developer at Téïcée";

pub const CONTACT: &str = "Email: milan.hommet@protonmail.com\n\
LinkedIn: https://www.linkedin.com/in/milan-hommet-840414315/";

pub const SKILLS: [SkillRow; 6] = [
    SkillRow {
        category: "Programming Languages",
        skills: "Python, JavaScript, TypeScript, Dart, PHP",
    },
    SkillRow {
        category: "Mobile Development",
        skills: "Flutter, React Native",
    },
    SkillRow {
        category: "Software Development",
        skills: "Electron",
    },
    SkillRow {
        category: "Web Development",
        skills: "React, Symfony, VueJS, NextJS, NodeJS",
    },
    SkillRow {
        category: "Databases",
        skills: "MySQL, MongoDB, Microsoft SQL Server",
    },
    SkillRow {
        category: "Game Engine",
        skills: "Unity",
    },
];
