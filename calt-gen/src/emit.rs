//! Rendering the feature program as feature file text

use serde::Deserialize;

use crate::{
    glyphs::GlyphClass,
    lookups::{LookupGroup, LookupRule},
};

/// The feature tag the generated lookups belong to.
pub const FEATURE_TAG: &str = "calt";

/// What to wrap the generated code in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Only the class and lookup definitions, suitable for pasting into
    /// an editor's feature panel.
    #[default]
    Body,
    /// A complete `feature calt { ... } calt;` block.
    Feature,
}

/// Everything generated for a single run, ready to be rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureProgram {
    pub states: Vec<GlyphClass>,
    pub transitions: Vec<GlyphClass>,
    pub partitions: Vec<GlyphClass>,
    /// Every exported glyph. Only rendered on request.
    pub all: GlyphClass,
    pub skip: GlyphClass,
    pub lookups: Vec<LookupGroup>,
}

/// Formats a [`FeatureProgram`].
#[derive(Clone, Debug, Default)]
pub struct Emitter {
    indent: String,
    include_all_class: bool,
}

impl Emitter {
    pub fn new(indent: impl Into<String>) -> Self {
        Emitter {
            indent: indent.into(),
            include_all_class: false,
        }
    }

    /// Also emit the class of all glyphs, which the skip class refers to.
    pub fn with_all_class(mut self, include: bool) -> Self {
        self.include_all_class = include;
        self
    }

    pub fn render(&self, program: &FeatureProgram, mode: RenderMode) -> String {
        match mode {
            RenderMode::Body => self.render_body(program),
            RenderMode::Feature => self.render_feature(program),
        }
    }

    /// Render the class definitions followed by the lookups.
    pub fn render_body(&self, program: &FeatureProgram) -> String {
        let mut sections = vec![
            self.class_definitions(&program.states),
            self.class_definitions(&program.transitions),
            self.class_definitions(&program.partitions),
        ];
        if self.include_all_class {
            sections.push(self.class_definitions(std::slice::from_ref(&program.all)));
        }
        sections.push(self.class_definitions(std::slice::from_ref(&program.skip)));
        sections.push(self.lookup_definitions(&program.lookups));
        sections.join("\n")
    }

    /// Render the body wrapped in a named feature block.
    pub fn render_feature(&self, program: &FeatureProgram) -> String {
        let inner = Emitter {
            indent: format!("{}\t", self.indent),
            include_all_class: self.include_all_class,
        };
        format!(
            "{0}feature {FEATURE_TAG} {{\n\n{1}\n{0}}} {FEATURE_TAG};",
            self.indent,
            inner.render_body(program)
        )
    }

    fn class_definitions(&self, classes: &[GlyphClass]) -> String {
        classes
            .iter()
            .map(|class| format!("{}{} = {};\n", self.indent, class.name(), class.body()))
            .collect()
    }

    /// Groups are emitted deepest first, separated by a blank line.
    fn lookup_definitions(&self, groups: &[LookupGroup]) -> String {
        groups
            .iter()
            .rev()
            .map(|group| {
                group
                    .rules
                    .iter()
                    .map(|rule| self.lookup(rule))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn lookup(&self, rule: &LookupRule) -> String {
        let indent = &self.indent;
        let name = &rule.name;
        format!(
            "{indent}lookup {name} {{\n{indent}\t{}\n{indent}}} {name};\n\n",
            substitution(rule)
        )
    }
}

/// The `sub` statement for a rule, with tokens joined by single spaces.
fn substitution(rule: &LookupRule) -> String {
    let mut tokens = Vec::with_capacity(rule.skip_count + 2);
    tokens.push(rule.trigger.to_string());
    tokens.extend(std::iter::repeat(rule.skip.to_string()).take(rule.skip_count));
    tokens.push(format!("{}'", rule.from));
    format!("sub {} by {};", tokens.join(" "), rule.to)
}
