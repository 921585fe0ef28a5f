//! Prompt construction for the review pipelines
//!
//! Fixed instruction templates with literal substitution only. Per-file
//! excerpts are capped upstream by the change-set reader; total prompt
//! length is unbounded, a known limitation of the source system.

use crate::ports::FileExcerpt;

/// System/user prompt pair for one inference call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPromptParts {
    pub system: String,
    pub user: String,
}

/// Persona and rubric for the diff-review pipeline
const DIFF_REVIEW_SYSTEM: &str = "\
You are a rigorous and encouraging code reviewer. Analyze the provided code \
diff for consistency, best practices, and potential errors. Answer in \
Markdown and structure the report exactly as follows:\n\n\
1. **Headline verdict**: open with a one-line assessment (e.g. 'Impeccable \
push!' or 'Attention: errors detected').\n\
2. **Strengths**: name at least one positive point.\n\
3. **Weaknesses / errors**:\n\
   - When errors are present, reference the affected line or function and \
propose a concrete fix.\n\
   - When none are present, propose at least two improvements (performance, \
readability, style).\n\
4. **Conclusion**: a short closing word of encouragement.";

/// Persona for the type-check explanation pipeline
const TYPE_CHECK_SYSTEM: &str = "\
You are an expert in Python static typing. Analyze the files below together \
with the type checker's diagnostics. Explain clearly to the developer how to \
fix each reported error, and write the result as an aesthetic, professional \
HTML report.";

/// Build the prompt for the diff-review pipeline
pub fn diff_review(diff: &str) -> ReviewPromptParts {
    ReviewPromptParts {
        system: DIFF_REVIEW_SYSTEM.to_string(),
        user: format!("Here is the code diff to analyze:\n\n```diff\n{diff}\n```"),
    }
}

/// Build the prompt for the type-check explanation pipeline
///
/// The checker report is included verbatim, followed by one labeled block
/// per reviewable file.
pub fn type_check_review(check_report: &str, excerpts: &[FileExcerpt]) -> ReviewPromptParts {
    let mut user = format!(
        "--- Type check report ---\n\
         {check_report}\n\
         -------------------------\n\n"
    );
    for excerpt in excerpts {
        user.push_str(&excerpt.prompt_block());
    }

    ReviewPromptParts {
        system: TYPE_CHECK_SYSTEM.to_string(),
        user,
    }
}
