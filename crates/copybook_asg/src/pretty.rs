//! Human-readable rendering of the declaration forest.
//!
//! Cross-reference reports want the reconstructed layout back in a
//! shape people recognize: one line per declaration, indented by
//! nesting depth, with the salient clauses inline.

use std::fmt::Write;

use crate::container::EntryContainer;
use crate::declaration::{DeclId, Declaration, DeclarationBody};

/// Configuration for rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of spaces per nesting level.
    pub indent_width: usize,
    /// Whether to append clause summaries to each line.
    pub show_clauses: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_clauses: true,
        }
    }
}

/// Renders the whole forest of a container.
#[must_use]
pub fn render(container: &EntryContainer) -> String {
    render_with_config(container, &RenderConfig::default())
}

/// Renders the whole forest with custom configuration.
#[must_use]
pub fn render_with_config(container: &EntryContainer, config: &RenderConfig) -> String {
    let mut output = String::new();
    for id in container.root_ids() {
        render_node(container, config, id, 0, &mut output);
    }
    output
}

/// Renders one declaration subtree.
#[must_use]
pub fn render_declaration(container: &EntryContainer, id: DeclId) -> String {
    let mut output = String::new();
    render_node(container, &RenderConfig::default(), id, 0, &mut output);
    output
}

fn render_node(
    container: &EntryContainer,
    config: &RenderConfig,
    id: DeclId,
    depth: usize,
    output: &mut String,
) {
    let Some(declaration) = container.get(id) else {
        return;
    };

    let indent = " ".repeat(depth * config.indent_width);
    let _ = write!(output, "{indent}{}", level_text(declaration));
    let _ = write!(output, " {}", name_text(declaration));

    match declaration.body() {
        DeclarationBody::Group(data) => {
            if config.show_clauses {
                let clauses = data.clauses();
                if let Some(picture) = clauses.picture() {
                    let _ = write!(output, " PIC {}", picture.picture);
                }
                for occurs in clauses.occurs() {
                    let _ = write!(output, " OCCURS {}", occurs.from);
                    if let Some(to) = occurs.to {
                        let _ = write!(output, " TO {to}");
                    }
                }
                if let Some(redefines) = clauses.redefines() {
                    let _ = write!(output, " REDEFINES {}", redefines.target);
                }
            }
            output.push('\n');
            for child in data.children() {
                render_node(container, config, *child, depth + 1, output);
            }
        }
        DeclarationBody::Rename(data) => {
            if config.show_clauses {
                let _ = write!(output, " RENAMES {}", data.renames.from);
                if let Some(through) = &data.renames.through {
                    let _ = write!(output, " THRU {through}");
                }
            }
            output.push('\n');
        }
        DeclarationBody::Condition(data) => {
            if config.show_clauses && !data.value.intervals.is_empty() {
                let _ = write!(output, " VALUE {}", data.value.intervals[0].from);
            }
            output.push('\n');
        }
        DeclarationBody::EmbeddedStatement(_) => {
            output.push_str(" [embedded statement]\n");
        }
    }
}

fn level_text(declaration: &Declaration) -> String {
    declaration
        .level()
        .map_or_else(|| "??".to_string(), |level| format!("{level:02}"))
}

fn name_text(declaration: &Declaration) -> &str {
    declaration.name().unwrap_or("FILLER")
}
