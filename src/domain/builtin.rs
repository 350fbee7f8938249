//! Builtin seed content
//!
//! The fixed category set and the starter checklist loaded on every launch.
//! There is no persistence; this is the whole initial state.

use super::task::{Category, Task};

/// The fixed category set, in tab order.
pub fn builtin_categories() -> Vec<Category> {
    vec![
        Category::new(
            "mindset",
            "The 1% Mindset",
            "brain",
            "Why Remote Devs Fail (Or Scale)",
            "In an office, people see you working. Remote, you are invisible until you \
             ship or speak. To be the \"best,\" you must manufacture visibility and trust \
             through reliability and over-communication.",
        ),
        Category::new(
            "code",
            "Clean Code 2025",
            "code",
            "Code for Humans, Not Machines",
            "\"Clean code is about empathy.\" Junior devs write code that works. Senior \
             devs write code that others can maintain, debug, and extend 6 months from now.",
        ),
        Category::new(
            "system",
            "System Design",
            "network",
            "Scalable Architecture Patterns",
            "Designing systems that are resilient, scalable, and maintainable requires \
             understanding trade-offs between consistency, availability, and partition \
             tolerance.",
        ),
    ]
}

/// The starter checklist, in display order. All tasks begin uncompleted.
pub fn builtin_tasks() -> Vec<Task> {
    vec![
        // Mindset
        Task::seed(
            "m1",
            "mindset",
            "Over-communicate Intent",
            "Don't disappear. If you're stepping away for 30 mins, say so. If you're \
             stuck for >45 mins, post a public question. Silence creates anxiety in \
             remote managers.",
            20,
        ),
        Task::seed(
            "m2",
            "mindset",
            "The \"Eat The Frog\" Start",
            "Do the hardest, most cognitively demanding task FIRST thing in the morning. \
             Don't check Slack/Email until you've done 1 hour of deep work.",
            30,
        ),
        Task::seed(
            "m3",
            "mindset",
            "Proactive Jira Updates",
            "Update your tickets before someone asks you to. Your ticket status is your \
             heartbeat to the rest of the organization.",
            15,
        ),
        // Clean code
        Task::seed(
            "c1",
            "code",
            "Names That Tell Stories",
            "Avoid `data`, `item`, `handle`. Use `userProfile`, `cartItem`, \
             `submitCheckoutForm`. If you need a comment to explain the variable name, \
             rename the variable.",
            20,
        ),
        Task::seed(
            "c2",
            "code",
            "Guard Clauses Over Nesting",
            "Don't nest `if` statements 3 levels deep. Check for failure conditions \
             early and `return`. Keep the 'happy path' at the root indentation level.",
            25,
        ),
        Task::seed(
            "c3",
            "code",
            "Accessibility Is Not Optional",
            "Use semantic HTML (`<button>` not `div`). Ensure keyboard navigability. A \
             1% developer cares about ALL users.",
            30,
        ),
        Task::seed(
            "c4",
            "code",
            "Self-Documenting Functions",
            "A function should do ONE thing. If `processUser` validates, saves, and \
             emails, break it into `validateUser`, `saveUser`, `emailUser`.",
            20,
        ),
        Task::seed(
            "c5",
            "code",
            "Console Hygiene",
            "Remove your `console.log('here')` before committing. Use `console.error` \
             for catches. Don't ship noise.",
            10,
        ),
        Task::seed(
            "c6",
            "code",
            "Component Composition",
            "Avoid massive 'God Components'. Break UI into small, reusable pieces. Use \
             slots or children props for flexibility.",
            25,
        ),
        // System design
        Task::seed(
            "s1",
            "system",
            "CAP Theorem Analysis",
            "Analyze your current project's database. Is it CP or AP? Document why that \
             trade-off was made in your engineering notes.",
            40,
        ),
        Task::seed(
            "s2",
            "system",
            "Design Idempotency Keys",
            "Draft a plan to make your critical POST endpoints idempotent using request \
             IDs to prevent duplicate processing on network retries.",
            35,
        ),
        Task::seed(
            "s3",
            "system",
            "Load Balancer Strategy",
            "Review your load balancing strategy (Round Robin, Least Connections, etc.). \
             Determine if 'Sticky Sessions' are creating hot spots.",
            30,
        ),
        Task::seed(
            "s4",
            "system",
            "Database Indexing Plan",
            "Identify slow queries in your logs. Propose specific compound indexes to \
             optimize them without over-indexing write-heavy tables.",
            45,
        ),
    ]
}
