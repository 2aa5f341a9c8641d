//! Challenge definitions bound to each part.
//!
//! Three quizzes, one ordered assembly, one matching deck. Step and card
//! identifiers are stable content ids; assembly presentation order is the
//! array order here, deliberately different from target-position order.

use super::{
    AssemblySpec, AssemblyStep, CardId, CardKind, ChallengeSpec, MatchingCard, MatchingSpec,
    PairId, QuizOption, QuizPresentation, QuizRound, QuizSpec, StepId,
};
use crate::part::PartId;

// =============================================================================
// Head: stack-trace reading quiz
// =============================================================================

static HEAD_ROUND_1: [QuizOption; 4] = [
    QuizOption {
        label: "/src/Legacy/Reports/PdfGenerator.php(203): calc_totals()",
        correct: true,
        explanation: None,
    },
    QuizOption {
        label: "/src/Service/ReportService.php(45): Legacy\\Reports\\PdfGenerator->generate()",
        correct: false,
        explanation: None,
    },
    QuizOption {
        label: "/src/Controller/AdminController.php(88): App\\Service\\ReportService->monthlyReport()",
        correct: false,
        explanation: None,
    },
    QuizOption {
        label: "/public/index.php(15): App\\Kernel->handle()",
        correct: false,
        explanation: None,
    },
];

static HEAD_ROUND_2: [QuizOption; 4] = [
    QuizOption {
        label: "/vendor/doctrine/orm/lib/Doctrine/ORM/UnitOfWork.php(300): commit()",
        correct: false,
        explanation: None,
    },
    QuizOption {
        label: "/src/Repository/UserRepository.php(50): Doctrine\\ORM\\EntityRepository->save()",
        correct: false,
        explanation: None,
    },
    QuizOption {
        label: "/src/Service/UserRegistrationService.php(112): App\\Repository\\UserRepository->add()",
        correct: true,
        explanation: None,
    },
    QuizOption {
        label: "/src/Controller/RegisterController.php(34): App\\Service\\UserRegistrationService->register()",
        correct: false,
        explanation: None,
    },
];

static HEAD_ROUND_3: [QuizOption; 4] = [
    QuizOption {
        label: "/src/Legacy/Auth/LoginHandler.php(20): session_start()",
        correct: false,
        explanation: None,
    },
    QuizOption {
        label: "/src/Controller/SecurityController.php(15): Legacy\\Auth\\LoginHandler::check()",
        correct: false,
        explanation: None,
    },
    QuizOption {
        label: "/src/Core/Router.php(88): App\\Controller\\SecurityController->login()",
        correct: false,
        explanation: None,
    },
    QuizOption {
        label: "/public/legacy_router.php(5): App\\Core\\Router->dispatch()",
        correct: true,
        explanation: None,
    },
];

static HEAD_ROUNDS: [QuizRound; 3] = [
    QuizRound {
        prompt: "CRITICAL ERROR! The application threw a 'DivisionByZeroError'. Click the \
                 stack frame where the code actually crashed.",
        options: &HEAD_ROUND_1,
    },
    QuizRound {
        prompt: "We need to debug a logic error. Click on the 'Service' layer where the \
                 business rules are applied.",
        options: &HEAD_ROUND_2,
    },
    QuizRound {
        prompt: "Identify the entry point of the request. Click on the file that initialized \
                 the entire process.",
        options: &HEAD_ROUND_3,
    },
];

static HEAD_QUIZ: QuizSpec = QuizSpec {
    title: "Stack Trace Detective",
    tagline: "Read the stack trace carefully.",
    presentation: QuizPresentation::StackFrames,
    rounds: &HEAD_ROUNDS,
};

// =============================================================================
// Torso: refactoring strategy quiz
// =============================================================================

static TORSO_ROUND_1: [QuizOption; 3] = [
    QuizOption {
        label: "Rewrite the entire class from scratch immediately.",
        correct: false,
        explanation: Some(
            "Big rewrites often fail and introduce regressions. Avoid 'The Big Rewrite' \
             unless absolutely necessary.",
        ),
    },
    QuizOption {
        label: "Add the feature inside the class as a private method.",
        correct: false,
        explanation: Some("This just increases technical debt and makes the 'God Class' larger."),
    },
    QuizOption {
        label: "Extract the logic needed for the feature into a new class, then inject it.",
        correct: true,
        explanation: Some(
            "Correct! Use the 'Strangler Fig' pattern to incrementally improve the system.",
        ),
    },
];

static TORSO_ROUND_2: [QuizOption; 3] = [
    QuizOption {
        label: "Write 'Characterization Tests' (Golden Master) to capture current behavior.",
        correct: true,
        explanation: Some(
            "Correct! You must ensure you don't break existing behavior before changing the \
             code structure.",
        ),
    },
    QuizOption {
        label: "Start refactoring and testing manually.",
        correct: false,
        explanation: Some("Manual testing is error-prone and slow. You need automated safety nets."),
    },
    QuizOption {
        label: "Delete it and replace it with a 3rd party library.",
        correct: false,
        explanation: Some("Replacing critical logic without understanding it is extremely risky."),
    },
];

static TORSO_ROUND_3: [QuizOption; 3] = [
    QuizOption {
        label: "Yes, it's the only way to fix the mess.",
        correct: false,
        explanation: Some(
            "Stops feature delivery and business value. The rewrite often takes longer than \
             expected.",
        ),
    },
    QuizOption {
        label: "No, advocate for continuous, incremental refactoring while shipping features.",
        correct: true,
        explanation: Some(
            "Correct! Refactoring should be part of the daily workflow, not a separate \
             'project'.",
        ),
    },
    QuizOption {
        label: "Yes, but only if we use a new trendy framework.",
        correct: false,
        explanation: Some("Changing frameworks doesn't solve architectural problems automatically."),
    },
];

static TORSO_ROUNDS: [QuizRound; 3] = [
    QuizRound {
        prompt: "You encounter a massive 'God Class' (3000+ lines) that works but is ugly. \
                 You need to add a small feature. What is the best approach?",
        options: &TORSO_ROUND_1,
    },
    QuizRound {
        prompt: "A critical legacy module has zero tests, and you need to refactor it. What \
                 is your first step?",
        options: &TORSO_ROUND_2,
    },
    QuizRound {
        prompt: "The team wants to stop all feature development for 3 months to rewrite the \
                 legacy core. Do you agree?",
        options: &TORSO_ROUND_3,
    },
];

static TORSO_QUIZ: QuizSpec = QuizSpec {
    title: "Refactoring Strategy",
    tagline: "Make the right decision for the legacy codebase.",
    presentation: QuizPresentation::StrategyCards,
    rounds: &TORSO_ROUNDS,
};

// =============================================================================
// Left arm: refactoring pipeline assembly
// =============================================================================

// Array order is the on-screen order; `position` is where each step belongs.
static LEFT_ARM_STEPS: [AssemblyStep; 5] = [
    AssemblyStep {
        id: StepId::new(2),
        label: "Write Test",
        position: 2,
    },
    AssemblyStep {
        id: StepId::new(5),
        label: "Commit",
        position: 5,
    },
    AssemblyStep {
        id: StepId::new(1),
        label: "Analyze",
        position: 1,
    },
    AssemblyStep {
        id: StepId::new(4),
        label: "Static Check",
        position: 4,
    },
    AssemblyStep {
        id: StepId::new(3),
        label: "Refactor",
        position: 3,
    },
];

static LEFT_ARM_ASSEMBLY: AssemblySpec = AssemblySpec {
    title: "The Refactoring Pipeline",
    tagline: "Click the steps in the correct logical order.",
    steps: &LEFT_ARM_STEPS,
};

// =============================================================================
// Right arm: type-safety matching deck
// =============================================================================

static RIGHT_ARM_CARDS: [MatchingCard; 8] = [
    MatchingCard {
        id: CardId::new(1),
        pair: PairId::new(1),
        label: "list<int>",
        kind: CardKind::Concept,
    },
    MatchingCard {
        id: CardId::new(2),
        pair: PairId::new(1),
        label: "[0, 1, 2]",
        kind: CardKind::Value,
    },
    MatchingCard {
        id: CardId::new(3),
        pair: PairId::new(2),
        label: "array{a: int}",
        kind: CardKind::Concept,
    },
    MatchingCard {
        id: CardId::new(4),
        pair: PairId::new(2),
        label: "['a' => 1]",
        kind: CardKind::Value,
    },
    MatchingCard {
        id: CardId::new(5),
        pair: PairId::new(3),
        label: "callable",
        kind: CardKind::Concept,
    },
    MatchingCard {
        id: CardId::new(6),
        pair: PairId::new(3),
        label: "fn() => true",
        kind: CardKind::Value,
    },
    MatchingCard {
        id: CardId::new(7),
        pair: PairId::new(4),
        label: "generator",
        kind: CardKind::Concept,
    },
    MatchingCard {
        id: CardId::new(8),
        pair: PairId::new(4),
        label: "yield $i;",
        kind: CardKind::Value,
    },
];

static RIGHT_ARM_MATCHING: MatchingSpec = MatchingSpec {
    title: "Type Safety Match",
    tagline: "Pair the strict types with their values.",
    cards: &RIGHT_ARM_CARDS,
};

// =============================================================================
// Legs: git command quiz
// =============================================================================

static LEGS_ROUND_1: [QuizOption; 3] = [
    QuizOption {
        label: "git reset --hard HEAD~1",
        correct: false,
        explanation: None,
    },
    QuizOption {
        label: "git revert HEAD",
        correct: false,
        explanation: None,
    },
    QuizOption {
        label: "git reset --soft HEAD~1",
        correct: true,
        explanation: None,
    },
];

static LEGS_ROUND_2: [QuizOption; 3] = [
    QuizOption {
        label: "git push -u origin feature-branch",
        correct: true,
        explanation: None,
    },
    QuizOption {
        label: "git remote add origin feature-branch",
        correct: false,
        explanation: None,
    },
    QuizOption {
        label: "git checkout -b feature-branch",
        correct: false,
        explanation: None,
    },
];

static LEGS_ROUND_3: [QuizOption; 3] = [
    QuizOption {
        label: "git merge develop --force",
        correct: false,
        explanation: None,
    },
    QuizOption {
        label: "git cherry-pick <commit-hash>",
        correct: true,
        explanation: None,
    },
    QuizOption {
        label: "git rebase develop",
        correct: false,
        explanation: None,
    },
];

static LEGS_ROUNDS: [QuizRound; 3] = [
    QuizRound {
        prompt: "You committed 'WIP' to main by mistake. You need to undo the commit but keep \
                 your work staged.",
        options: &LEGS_ROUND_1,
    },
    QuizRound {
        prompt: "You created a new local branch and need to push it to the remote, \
                 establishing a tracking relationship.",
        options: &LEGS_ROUND_2,
    },
    QuizRound {
        prompt: "You need a critical hotfix from the 'develop' branch applied immediately to \
                 your 'release' branch.",
        options: &LEGS_ROUND_3,
    },
];

static LEGS_QUIZ: QuizSpec = QuizSpec {
    title: "Git Guru Challenge",
    tagline: "Select the correct command to fix the scenario.",
    presentation: QuizPresentation::GitConsole,
    rounds: &LEGS_ROUNDS,
};

/// The challenge definition bound to a part.
pub fn challenge_spec(part: PartId) -> ChallengeSpec {
    match part {
        PartId::Head => ChallengeSpec::Quiz(&HEAD_QUIZ),
        PartId::Torso => ChallengeSpec::Quiz(&TORSO_QUIZ),
        PartId::LeftArm => ChallengeSpec::Assembly(&LEFT_ARM_ASSEMBLY),
        PartId::RightArm => ChallengeSpec::Matching(&RIGHT_ARM_MATCHING),
        PartId::Legs => ChallengeSpec::Quiz(&LEGS_QUIZ),
    }
}
