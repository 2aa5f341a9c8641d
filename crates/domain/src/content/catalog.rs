//! Per-part descriptive content for the detail overlay.

use super::{InfoPoint, PartContent, PartIcon};
use crate::part::PartId;

static HEAD_POINTS: [InfoPoint; 7] = [
    InfoPoint {
        summary: "Think first, ask the team second.",
        detail: "Do not rush into changes. Discuss with the team to understand the historical \
                 context and potential side effects before writing code.",
    },
    InfoPoint {
        summary: "Errors: Custom error handlers.",
        detail: "Implement custom error handlers that report notices, bad asserts, and wrong \
                 code usage with all relevant context.",
    },
    InfoPoint {
        summary: "Logging: Understandable logging.",
        detail: "Use tools like syslog for medium-sized applications to keep logs centralized \
                 and searchable.",
    },
    InfoPoint {
        summary: "Grouping: Aggregate errors.",
        detail: "Use Sentry to group errors. It helps you prioritize by seeing how many \
                 customers are affected by a specific issue.",
    },
    InfoPoint {
        summary: "Git History: Analyze changes.",
        detail: "Often new bugs are introduced by recent changes. Good commit messages help \
                 track down the root cause quickly.",
    },
    InfoPoint {
        summary: "Local Containers: Debug safely.",
        detail: "Download the app with a prod-like database dump to analyze problems locally \
                 without touching production.",
    },
    InfoPoint {
        summary: "Database Tools: EXPLAIN SQL.",
        detail: "Use \"EXPLAIN\" to analyze slow queries and rely on IDE integration for \
                 database structure visibility.",
    },
];

static TORSO_POINTS: [InfoPoint; 4] = [
    InfoPoint {
        summary: "You can introduce whatever is helpful.",
        detail: "Legacy does not mean frozen. You can introduce modern tools and patterns \
                 alongside old code.",
    },
    InfoPoint {
        summary: "Transform it into a well-maintained system.",
        detail: "The goal is to gradually refactor the system until it is stable, typed, and \
                 clean.",
    },
    InfoPoint {
        summary: "It requires patience.",
        detail: "Refactoring is a marathon, not a sprint. Small, consistent improvements \
                 compound over time.",
    },
    InfoPoint {
        summary: "Do not be afraid of the monster.",
        detail: "Tame it by understanding it. Once you have tests and static analysis, the \
                 fear disappears.",
    },
];

static LEFT_ARM_POINTS: [InfoPoint; 5] = [
    InfoPoint {
        summary: "Custom Error Handling.",
        detail: "Report bad \"assert\" calls, bad indexes, and wrong code usage explicitly to \
                 developers.",
    },
    InfoPoint {
        summary: "Autocompletion for everything.",
        detail: "Annotate classes, properties, SQL queries, CSS, HTML, and JS in PHP (e.g. via \
                 @lang annotations) to enable IDE support.",
    },
    InfoPoint {
        summary: "Static-Code Analysis.",
        detail: "Preventing bugs is better than fixing them. Use types and analysis tools to \
                 stop stupid bugs.",
    },
    InfoPoint {
        summary: "Automate the Refactoring.",
        detail: "Use tools like PHP-CS-Fixer or Rector to fix code once and prevent future \
                 regressions automatically.",
    },
    InfoPoint {
        summary: "No Strings for Code.",
        detail: "Use constants, classes, and properties instead of magic strings so static \
                 analysis can validate them.",
    },
];

static RIGHT_ARM_POINTS: [InfoPoint; 5] = [
    InfoPoint {
        summary: "Sentry: External error collecting.",
        detail: "Use custom handlers to add context (like Active Record IDs) to error reports.",
    },
    InfoPoint {
        summary: "Generics via PHPDocs.",
        detail: "Add generic types to PHPDocs to greatly improve IDE autocompletion and static \
                 analysis.",
    },
    InfoPoint {
        summary: "No \"mixed\" types.",
        detail: "Be specific. Use \"array<int, string>\" instead of just \"array\" to make \
                 data structures predictable.",
    },
    InfoPoint {
        summary: "PSR Standards.",
        detail: "Adopt community standards like PSR-15 (handlers), PSR-11 (container), and \
                 PSR-3 (logger) for interoperability.",
    },
    InfoPoint {
        summary: "Code Style Enforcer.",
        detail: "One code style to rule them all. Use PHP-CS-Fixer/PHP_CodeSniffer to check \
                 all ~10,000 classes automatically.",
    },
];

static LEGS_POINTS: [InfoPoint; 6] = [
    InfoPoint {
        summary: "IDE: PhpStorm.",
        detail: "Use an IDE with full auto-completion and suggestion capabilities powered by \
                 your static analysis.",
    },
    InfoPoint {
        summary: "Auto-Formatter.",
        detail: "Run as a pre-commit hook so you never have to waste mental energy discussing \
                 code style.",
    },
    InfoPoint {
        summary: "Git Skills.",
        detail: "Learn to use revert, cherry-pick, and bisect to manage changes and find bugs \
                 efficiently.",
    },
    InfoPoint {
        summary: "Custom Static Analysis Rules.",
        detail: "Write your own custom rules to enforce project-specific architectural \
                 constraints.",
    },
    InfoPoint {
        summary: "Root Cause Analysis.",
        detail: "Don't just patch the symptom. Spend the time to understand and fix the \
                 underlying root cause.",
    },
    InfoPoint {
        summary: "Testing.",
        detail: "Writing a test is always a good idea, at least to ensure the same bug never \
                 comes back.",
    },
];

static HEAD: PartContent = PartContent {
    part: PartId::Head,
    title: "The Brain: Analysis & Thinking",
    subtitle: "First rule: Think or ask someone",
    description: "Before touching legacy code, you must understand it. Analyzing is the most \
                  critical step to avoid breaking existing functionality.",
    icon: PartIcon::Brain,
    points: &HEAD_POINTS,
};

static TORSO: PartContent = PartContent {
    part: PartId::Torso,
    title: "The Heart: A Love Story",
    subtitle: "Escaping the Legacy Codebase",
    description: "After years working with >10 year old PHP code, the core philosophy is that \
                  you CAN escape the legacy trap and introduce modern practices in a \
                  well-maintained system.",
    icon: PartIcon::Heart,
    points: &TORSO_POINTS,
};

static LEFT_ARM: PartContent = PartContent {
    part: PartId::LeftArm,
    title: "Left Arm: The 5 Core Steps",
    subtitle: "The heavy lifting of refactoring",
    description: "These are the first 5 important steps taken to modernize the codebase.",
    icon: PartIcon::Wrench,
    points: &LEFT_ARM_POINTS,
};

static RIGHT_ARM: PartContent = PartContent {
    part: PartId::RightArm,
    title: "Right Arm: The 5 Additional Steps",
    subtitle: "Advanced tooling and standards",
    description: "Once the basics are in place, these 5 additional steps solidify the \
                  stability.",
    icon: PartIcon::Shield,
    points: &RIGHT_ARM_POINTS,
};

static LEGS: PartContent = PartContent {
    part: PartId::Legs,
    title: "The Legs: Fixing & Preventing",
    subtitle: "Moving forward and standing ground",
    description: "How to fix existing code efficiently and prevent future bugs from dragging \
                  you down.",
    icon: PartIcon::Footprints,
    points: &LEGS_POINTS,
};

/// Descriptive content for a part's detail overlay.
pub fn part_content(part: PartId) -> &'static PartContent {
    match part {
        PartId::Head => &HEAD,
        PartId::Torso => &TORSO,
        PartId::LeftArm => &LEFT_ARM,
        PartId::RightArm => &RIGHT_ARM,
        PartId::Legs => &LEGS,
    }
}
