// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Conventional Comments vocabulary.
//!
//! Labels and decorations follow <https://conventionalcomments.org>. Both sets
//! are closed, but the badge builders accept arbitrary tokens so that unknown
//! values degrade to fallback colors instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primary category of a review comment.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash,)]
#[serde(rename_all = "kebab-case")]
pub enum Label
{
    /// Highlights something positive.
    Praise,
    /// Trivial preference-based request.
    Nitpick,
    /// Proposes an improvement.
    Suggestion,
    /// Highlights a specific problem.
    Issue,
    /// Small, trivial but necessary change.
    Todo,
    /// Asks for clarification or investigation.
    Question,
    /// Idea that came up while reviewing.
    Thought,
    /// Simple task that must be done.
    Chore,
    /// Something the reader should take note of.
    Note,
    /// Misspelling.
    Typo,
    /// Quality improvement.
    Polish,
    /// Much like a nitpick.
    Quibble,
}

impl Label
{
    /// Every label in canonical order.
    pub const ALL: [Label; 12] = [
        Label::Praise,
        Label::Nitpick,
        Label::Suggestion,
        Label::Issue,
        Label::Todo,
        Label::Question,
        Label::Thought,
        Label::Chore,
        Label::Note,
        Label::Typo,
        Label::Polish,
        Label::Quibble,
    ];

    /// Token used in badges and comments.
    pub const fn as_str(self,) -> &'static str
    {
        match self {
            Label::Praise => "praise",
            Label::Nitpick => "nitpick",
            Label::Suggestion => "suggestion",
            Label::Issue => "issue",
            Label::Todo => "todo",
            Label::Question => "question",
            Label::Thought => "thought",
            Label::Chore => "chore",
            Label::Note => "note",
            Label::Typo => "typo",
            Label::Polish => "polish",
            Label::Quibble => "quibble",
        }
    }

    /// Resolves a token, returning `None` for anything outside the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use conventional_shields::Label;
    ///
    /// assert_eq!(Label::from_token("issue"), Some(Label::Issue));
    /// assert_eq!(Label::from_token("Issue"), None);
    /// ```
    pub fn from_token(token: &str,) -> Option<Self,>
    {
        Self::ALL.into_iter().find(|label| label.as_str() == token,)
    }

    /// One-line description shown in catalogues and help output.
    pub const fn description(self,) -> &'static str
    {
        match self {
            Label::Praise => "Praises highlight something positive",
            Label::Nitpick => "Nitpicks are trivial preference-based requests",
            Label::Suggestion => "Suggestions propose improvements",
            Label::Issue => "Issues highlight specific problems",
            Label::Todo => "TODO's are small, trivial, but necessary changes",
            Label::Question => "Questions for clarification or investigation",
            Label::Thought => "Thoughts represent ideas that popped up from reviewing",
            Label::Chore => "Chores are simple tasks that must be done",
            Label::Note => "Notes highlight something the reader should take note of",
            Label::Typo => "Typo comments for misspellings",
            Label::Polish => "Polish comments for quality improvements",
            Label::Quibble => "Quibbles are very much like nitpicks",
        }
    }
}

impl fmt::Display for Label
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.as_str(),)
    }
}

/// Secondary qualifier attached to a label.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash,)]
#[serde(rename_all = "kebab-case")]
pub enum Decoration
{
    /// Should not prevent acceptance.
    NonBlocking,
    /// Should prevent acceptance until resolved.
    Blocking,
    /// Resolve only if the changes are minor.
    IfMinor,
    Security,
    Test,
    Ux,
    Performance,
    Accessibility,
    Documentation,
    Style,
    Refactor,
    Bug,
    Feature,
    Breaking,
    Deprecated,
    Experimental,
    Wip,
    Draft,
    Review,
    Approved,
    Rejected,
}

impl Decoration
{
    /// Every decoration in canonical order.
    pub const ALL: [Decoration; 21] = [
        Decoration::NonBlocking,
        Decoration::Blocking,
        Decoration::IfMinor,
        Decoration::Security,
        Decoration::Test,
        Decoration::Ux,
        Decoration::Performance,
        Decoration::Accessibility,
        Decoration::Documentation,
        Decoration::Style,
        Decoration::Refactor,
        Decoration::Bug,
        Decoration::Feature,
        Decoration::Breaking,
        Decoration::Deprecated,
        Decoration::Experimental,
        Decoration::Wip,
        Decoration::Draft,
        Decoration::Review,
        Decoration::Approved,
        Decoration::Rejected,
    ];

    /// Token used in badges and comments.
    pub const fn as_str(self,) -> &'static str
    {
        match self {
            Decoration::NonBlocking => "non-blocking",
            Decoration::Blocking => "blocking",
            Decoration::IfMinor => "if-minor",
            Decoration::Security => "security",
            Decoration::Test => "test",
            Decoration::Ux => "ux",
            Decoration::Performance => "performance",
            Decoration::Accessibility => "accessibility",
            Decoration::Documentation => "documentation",
            Decoration::Style => "style",
            Decoration::Refactor => "refactor",
            Decoration::Bug => "bug",
            Decoration::Feature => "feature",
            Decoration::Breaking => "breaking",
            Decoration::Deprecated => "deprecated",
            Decoration::Experimental => "experimental",
            Decoration::Wip => "wip",
            Decoration::Draft => "draft",
            Decoration::Review => "review",
            Decoration::Approved => "approved",
            Decoration::Rejected => "rejected",
        }
    }

    /// Resolves a token, returning `None` for anything outside the set.
    pub fn from_token(token: &str,) -> Option<Self,>
    {
        Self::ALL.into_iter().find(|decoration| decoration.as_str() == token,)
    }

    pub const fn description(self,) -> &'static str
    {
        match self {
            Decoration::NonBlocking => "Should not prevent acceptance",
            Decoration::Blocking => "Should prevent acceptance until resolved",
            Decoration::IfMinor => "Should resolve only if changes are minor",
            Decoration::Security => "Security-related comment",
            Decoration::Test => "Test-related comment",
            Decoration::Ux => "User experience related",
            Decoration::Performance => "Performance related",
            Decoration::Accessibility => "Accessibility related",
            Decoration::Documentation => "Documentation related",
            Decoration::Style => "Code style related",
            Decoration::Refactor => "Refactoring suggestion",
            Decoration::Bug => "Bug-related",
            Decoration::Feature => "Feature-related",
            Decoration::Breaking => "Breaking change",
            Decoration::Deprecated => "Deprecation related",
            Decoration::Experimental => "Experimental feature",
            Decoration::Wip => "Work in progress",
            Decoration::Draft => "Draft status",
            Decoration::Review => "Review related",
            Decoration::Approved => "Approved status",
            Decoration::Rejected => "Rejected status",
        }
    }
}

impl fmt::Display for Decoration
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.as_str(),)
    }
}
