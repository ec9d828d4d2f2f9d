//! Base + override configuration merge.
//!
//! The result starts as a deep copy of the base. For each section the
//! override supplies, fields are patched only when the override value is
//! meaningfully set: non-blank strings, `Some` for optional values, and
//! always for the plain booleans `enabled` and `template_synced`.
//! No validation happens here.

use crate::domain::AppError;
use crate::domain::configuration::model::{
    GitHubConfig, LanguageConfig, OptimizationConfig, ProjectConfig, SdkConfig, SdkConfiguration,
};

/// Combine `base` with a sparse `overrides` configuration into a new value.
pub fn merge(
    base: Option<&SdkConfiguration>,
    overrides: Option<&SdkConfiguration>,
) -> Result<SdkConfiguration, AppError> {
    let base = base
        .ok_or_else(|| AppError::invalid_argument("base", "base configuration is required"))?;

    let mut merged = base.clone();
    let Some(overrides) = overrides else {
        return Ok(merged);
    };

    if let Some(project) = &overrides.project {
        merge_project(merged.project.get_or_insert_with(Default::default), project);
    }
    if let Some(sdk) = &overrides.sdk {
        merge_sdk(merged.sdk.get_or_insert_with(Default::default), sdk);
    }
    if let Some(language) = &overrides.language {
        merge_language(merged.language.get_or_insert_with(Default::default), language);
    }
    if let Some(github) = &overrides.github {
        merge_github(merged.github.get_or_insert_with(Default::default), github);
    }
    if let Some(optimization) = &overrides.optimization {
        merge_optimization(merged.optimization.get_or_insert_with(Default::default), optimization);
    }

    Ok(merged)
}

fn patch_text(target: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = value
        && !v.trim().is_empty()
    {
        *target = Some(v.clone());
    }
}

fn patch_optional<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        target.clone_from(value);
    }
}

fn merge_project(target: &mut ProjectConfig, source: &ProjectConfig) {
    patch_text(&mut target.name, &source.name);
    patch_text(&mut target.version, &source.version);
    patch_text(&mut target.template_version, &source.template_version);
    patch_text(&mut target.created, &source.created);
    patch_text(&mut target.updated, &source.updated);
    patch_text(&mut target.language, &source.language);
    patch_text(&mut target.framework, &source.framework);
    patch_text(&mut target.mode, &source.mode);
    patch_text(&mut target.author, &source.author);
}

fn merge_sdk(target: &mut SdkConfig, source: &SdkConfig) {
    patch_text(&mut target.version, &source.version);
    patch_text(&mut target.min_dotnet_version, &source.min_dotnet_version);
}

fn merge_language(target: &mut LanguageConfig, source: &LanguageConfig) {
    patch_text(&mut target.conversation_language, &source.conversation_language);
    patch_text(&mut target.conversation_language_name, &source.conversation_language_name);
}

fn merge_github(target: &mut GitHubConfig, source: &GitHubConfig) {
    target.enabled = source.enabled;
    patch_optional(&mut target.repository, &source.repository);
    patch_optional(&mut target.auto_delete_branches, &source.auto_delete_branches);
}

fn merge_optimization(target: &mut OptimizationConfig, source: &OptimizationConfig) {
    target.template_synced = source.template_synced;
    patch_optional(&mut target.last_sync, &source.last_sync);
}
