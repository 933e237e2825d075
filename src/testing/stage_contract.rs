use crate::{config::SlugConfig, stage::Stage};

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// Configuration the stage runs under. Most stages ignore it.
    fn config() -> SlugConfig {
        SlugConfig::new()
    }

    /// General test samples (may or may not trigger changes)
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", "a & b", ""]
    }

    /// Samples that should pass through unchanged (zero-copy test).
    ///
    /// Default: already-normalized slugs, which no stage should touch.
    fn should_pass_through() -> &'static [&'static str] {
        &[
            "hello",       // Simple lowercase
            "world",       // Another simple word
            "test123",     // Alphanumeric
            "hello_world", // Slug
            "",            // Empty string
        ]
    }

    /// Input/output pairs that verify correct transformations.
    ///
    /// Return empty slice if stage doesn't have predictable transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// `needs_apply` returns `true` exactly when `apply` changes the text.
    /// Stages with a conservative pre-check return `false` here.
    fn exact_needs_apply() -> bool {
        true
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → `false` only when `apply` is the identity
/// 4. `handles_empty_string` → empty in, empty out
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
///
/// Every contract runs in every built-in language.
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&$stage);
        $crate::testing::stage_contract::handles_empty_string(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

#[cfg(test)]
use crate::{ENG, context::Context, lang::all_langs};
#[cfg(test)]
use std::borrow::Cow;

#[cfg(test)]
fn run<'a, S: Stage>(stage: &S, text: Cow<'a, str>, ctx: &Context<'_>) -> Cow<'a, str> {
    if stage.needs_apply(&text, ctx) {
        stage.apply(text, ctx)
    } else {
        text
    }
}

#[cfg(test)]
pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    let cfg = S::config();
    for &lang in all_langs() {
        let ctx = Context::new(lang, &cfg);

        for &input in S::samples() {
            let text = run(stage, Cow::Borrowed(input), &ctx);

            // Second pass – must never allocate again
            let old_ptr = text.as_ref() as *const str;
            let text = run(stage, text, &ctx);
            assert_eq!(
                old_ptr,
                text.as_ref() as *const str,
                "zero-copy violated on second pass of `{}` (lang: {lang}, input: `{input}`)",
                stage.name()
            );
        }

        // Pass-through samples must always be zero-copy and unchanged
        for &pass_through in S::should_pass_through() {
            let text = stage.apply(Cow::Borrowed(pass_through), &ctx);
            assert_eq!(text.as_ref(), pass_through);
            assert!(
                matches!(text, Cow::Borrowed(s) if s.as_ptr() == pass_through.as_ptr()),
                "zero-copy violated on pass-through sample of `{}` (lang: {lang}, input: `{pass_through}`)",
                stage.name()
            );
        }

        // Transformation samples
        for &(input, expected) in S::should_transform() {
            let text = run(stage, Cow::Borrowed(input), &ctx);
            assert_eq!(text.as_ref(), expected, "`{}` on `{input}`", stage.name());
        }
    }
}

#[cfg(test)]
pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    let cfg = S::config();
    for &lang in all_langs() {
        let ctx = Context::new(lang, &cfg);
        for &input in S::samples() {
            let once = stage.apply(Cow::Borrowed(input), &ctx);
            let twice = stage.apply(once.clone(), &ctx);
            assert_eq!(once, twice, "apply() not idempotent in {lang} on `{input}`");
        }
    }
}

#[cfg(test)]
pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    let cfg = S::config();
    for &lang in all_langs() {
        let ctx = Context::new(lang, &cfg);
        let inputs = S::samples()
            .iter()
            .chain(S::should_pass_through())
            .copied()
            .chain(S::should_transform().iter().map(|(input, _)| *input));
        for input in inputs {
            check_accuracy(stage, input, &ctx, S::exact_needs_apply());
        }
    }
}

#[cfg(test)]
fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context<'_>, exact: bool) {
    let predicted = stage.needs_apply(input, ctx);
    // Owned input so that stages which always allocate are not penalised.
    let output = stage.apply(Cow::Owned(input.to_owned()), ctx);
    let actually_changes = output != input;
    if exact {
        assert_eq!(
            predicted,
            actually_changes,
            "needs_apply() mismatch for stage `{}` in {lang} on `{input}` (output = {output:?})",
            stage.name(),
            lang = ctx.lang
        );
    } else {
        assert!(
            predicted || !actually_changes,
            "needs_apply() skipped a change for stage `{}` in {lang} on `{input}` (output = {output:?})",
            stage.name(),
            lang = ctx.lang
        );
    }
}

#[cfg(test)]
pub fn handles_empty_string<S: StageTestConfig>(stage: &S) {
    let cfg = S::config();
    let ctx = Context::new(ENG, &cfg);
    let result = run(stage, Cow::Borrowed(""), &ctx);
    assert_eq!(result.as_ref(), "");
}

#[cfg(test)]
pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let cfg = S::config();
    let ctx = Context::new(ENG, &cfg);
    let _ = stage.apply(
        Cow::Borrowed("Hello 世界 русский Türkçe العربية 简体中文 — “x” & @"),
        &ctx,
    );
}
