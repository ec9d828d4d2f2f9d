use include_dir::{Dir, DirEntry, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::configuration::defaults::DEFAULT_VERSION;
use crate::domain::{AppError, ProjectInfo};
use crate::ports::{ScaffoldFile, TemplateStore};

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

/// Scaffold templates embedded in the binary, rendered with minijinja.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn scaffold_files(&self, project: &ProjectInfo) -> Result<Vec<ScaffoldFile>, AppError> {
        let context = template_context(project);
        let mut files = Vec::new();
        collect_files(&SCAFFOLD_DIR, &context, &mut files)?;
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }
}

fn template_context(project: &ProjectInfo) -> minijinja::Value {
    context! {
        PROJECT_NAME => project.name.as_str(),
        VERSION => DEFAULT_VERSION,
        DATE => project.created_date.as_str(),
        AUTHOR => project.author_or_default(),
        FRAMEWORK => project.framework_or_default(),
        SDK_VERSION => project.sdk_version.as_str(),
    }
}

fn collect_files(
    dir: &'static Dir,
    context: &minijinja::Value,
    files: &mut Vec<ScaffoldFile>,
) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let path = file.path().to_string_lossy().to_string();
                let content = file.contents_utf8().ok_or_else(|| AppError::Template {
                    name: path.clone(),
                    details: "template is not UTF-8".to_string(),
                })?;
                let rendered = render_template(&path, content, context)?;
                files.push(ScaffoldFile { path, content: rendered });
            }
            DirEntry::Dir(subdir) => collect_files(subdir, context, files)?,
        }
    }
    Ok(())
}

fn render_template(
    name: &str,
    content: &str,
    context: &minijinja::Value,
) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);

    env.render_str(content, context)
        .map_err(|err| AppError::Template { name: name.to_string(), details: err.to_string() })
}
