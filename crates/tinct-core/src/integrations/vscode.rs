//! VS Code color themes.
//!
//! [`VsCodeTheme`] is the on-disk theme format. [`VsCodeTheme::generate`]
//! builds one from a [`ThemeDefinition`] through the [`MAPPING`] tables; the
//! result can then be combined with a hand-written base file by
//! [`crate::merge::merge`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::filter::FilterConfig;
use crate::scope::{
    bind_modifiers, generate, resolve_filtered, style_value, ColorEntry, Lookup, ScopeMapping,
    SemanticEntry, SyntaxRule,
};
use crate::theme::{ThemeDefinition, Variant};

// ─── File format ────────────────────────────────────────────────────────────

/// A `scope` field: one selector string (possibly comma-separated) or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScopeSelector {
    One(String),
    Many(Vec<String>),
}

impl ScopeSelector {
    /// Individual scope selectors, with comma-separated strings split apart.
    pub fn identifiers(&self) -> Vec<String> {
        let split = |s: &String| -> Vec<String> {
            s.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        };
        match self {
            ScopeSelector::One(s) => split(s),
            ScopeSelector::Many(list) => list.iter().flat_map(split).collect(),
        }
    }
}

/// One entry of `tokenColors`. Unknown fields are carried through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenColorRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<ScopeSelector>,
    #[serde(default)]
    pub settings: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenColorRule {
    pub fn scope_identifiers(&self) -> Vec<String> {
        self.scope
            .as_ref()
            .map(ScopeSelector::identifiers)
            .unwrap_or_default()
    }
}

/// A complete VS Code theme file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VsCodeTheme {
    pub name: String,
    #[serde(rename = "type")]
    pub variant: Variant,
    pub colors: Map<String, Value>,
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<TokenColorRule>,
    #[serde(rename = "semanticHighlighting")]
    pub semantic_highlighting: bool,
    #[serde(rename = "semanticTokenColors")]
    pub semantic_token_colors: Map<String, Value>,
}

impl VsCodeTheme {
    /// Resolves, filters and maps `theme` into a fresh VS Code theme.
    ///
    /// `filters` is the effective filter set; layering the theme's own
    /// filters with build and command-line options is the caller's job.
    pub fn generate(theme: &ThemeDefinition, filters: &FilterConfig) -> Result<Self> {
        let resolved = resolve_filtered(theme, MAPPING.sources(), filters)?;
        let modifiers = bind_modifiers(theme, filters)?;
        let fragments = generate(&resolved, &MAPPING, &modifiers);

        let mut colors: Map<String, Value> = fragments
            .colors
            .into_iter()
            .map(|(key, color)| (key, Value::String(color.to_string())))
            .collect();
        for (key, color) in &theme.extra_colors {
            colors.insert(key.clone(), Value::String(filters.apply(*color).to_string()));
        }

        let token_colors = fragments
            .syntax
            .into_iter()
            .map(|scoped| {
                let mut settings = Map::new();
                if let Some(color) = scoped.style.foreground {
                    settings.insert("foreground".into(), Value::String(color.to_string()));
                }
                if let Some(font_style) = scoped.style.font_style {
                    settings.insert("fontStyle".into(), Value::String(font_style));
                }
                TokenColorRule {
                    name: Some(scoped.scope.clone()),
                    scope: Some(ScopeSelector::Many(vec![scoped.scope])),
                    settings,
                    extra: Map::new(),
                }
            })
            .collect();

        let semantic_token_colors = fragments
            .semantic
            .iter()
            .map(|(key, style)| (key.clone(), style_value(style)))
            .collect();

        Ok(VsCodeTheme {
            name: theme.name.clone(),
            variant: theme.variant,
            colors,
            token_colors,
            semantic_highlighting: theme.semantic_highlighting,
            semantic_token_colors,
        })
    }
}

// ─── Mapping tables ─────────────────────────────────────────────────────────

/// `color!("key" => ["exact", ...] "cascade")`; either part may be omitted.
macro_rules! color {
    ($key:literal => $path:literal) => {
        ColorEntry::new($key, Lookup::at($path))
    };
    ($key:literal => [$($exact:literal),+] $path:literal) => {
        ColorEntry::new($key, Lookup::first(&[$($exact),+], $path))
    };
    ($key:literal => [$($exact:literal),+]) => {
        ColorEntry::new($key, Lookup::only(&[$($exact),+]))
    };
}

macro_rules! syntax {
    ($scope:literal => $path:literal) => {
        SyntaxRule::new($scope, $path)
    };
    ($scope:literal => $path:literal, $style:literal) => {
        SyntaxRule::styled($scope, $path, $style)
    };
}

macro_rules! semantic {
    ($token:literal => $path:literal) => {
        SemanticEntry {
            token_type: $token,
            lookup: Lookup::first(&[concat!("semantic.", $token)], $path),
        }
    };
}

/// Everything VS Code reads from a theme.
pub const MAPPING: ScopeMapping = ScopeMapping {
    colors: COLORS,
    syntax: SYNTAX,
    semantic: SEMANTIC,
};

const COLORS: &[ColorEntry] = &[
    // editor
    color!("editor.background" => ["ui.overrides.editor.background", "ui.backgrounds.surface"] "background"),
    color!("editor.foreground" => ["ui.overrides.editor.foreground"] "ui.foregrounds.default"),
    color!("editor.hoverHighlightBackground" => ["ui.overrides.editor.lineHighlight"] "ui.selection.background"),
    color!("editor.selectionBackground" => "ui.selection.background"),
    color!("editor.selectionHighlightBorder" => ["ui.overrides.editor.lineHighlightBorder"] "ui.borders.active"),
    color!("editor.selectionHighlightBackground" => ["ui.overrides.editor.selectionHighlight"] "ui.selection.background"),
    color!("editor.wordHighlightStrongBackground" => ["ui.overrides.editor.wordHighlightStrong"] "ui.selection.background"),
    color!("editor.findMatchBackground" => ["ui.overrides.editor.findMatch"] "ui.foregrounds.accent"),
    color!("editor.findMatchHighlightBackground" => ["ui.overrides.editor.findMatchHighlight"] "ui.selection.background"),
    color!("editor.findRangeHighlightBackground" => ["ui.overrides.editor.rangeHighlight"] "ui.selection.background"),
    color!("editor.compositionBorder" => "ui.borders.active"),
    color!("editorLineNumber.foreground" => ["ui.overrides.editorLineNumber.foreground"] "ui.foregrounds.muted"),
    color!("editorLineNumber.activeForeground" => ["ui.overrides.editorLineNumber.activeForeground"] "ui.foregrounds.default"),
    color!("diffEditorGutter.insertedLineBackground" => ["ui.overrides.editorGutter.addedBackground"] "ui.git.added"),
    color!("diffEditorGutter.removedLineBackground" => ["ui.overrides.editorGutter.deletedBackground"] "ui.git.deleted"),
    color!("editorGroup.border" => "ui.borders.subtle"),
    color!("editorWidget.background" => "ui.backgrounds.overlay"),
    color!("editorWidget.border" => "ui.borders.default"),
    color!("editorSuggestWidget.background" => "ui.backgrounds.raised"),
    color!("editorError.foreground" => "ui.status.error"),
    color!("editorWarning.foreground" => "ui.status.warning"),
    color!("editorInfo.foreground" => "ui.status.info"),
    // quick input
    color!("quickInput.background" => "ui.backgrounds.surface"),
    color!("quickInput.foreground" => "ui.foregrounds.default"),
    color!("quickInputList.focusBackground" => "ui.backgrounds.overlay"),
    color!("quickInputList.focusForeground" => "ui.foregrounds.focused"),
    // chat
    color!("chat.requestBackground" => ["ui.overrides.chat.requestBackground"] "ui.backgrounds.surface"),
    color!("chat.requestForeground" => ["ui.overrides.editor.foreground"] "ui.foregrounds.default"),
    color!("chat.requestBorder" => "ui.borders.default"),
    color!("chat.checkpointSeparator" => ["ui.borders.active"] "ui.borders.subtle"),
    color!("chat.editedFileForeground" => ["ui.overrides.chat.editedFileForeground"] "ui.foregrounds.muted"),
    // activity bar
    color!("activityBar.background" => ["ui.overrides.activityBar.background"] "ui.backgrounds.base"),
    color!("activityBar.foreground" => ["ui.overrides.activityBar.foreground"] "ui.foregrounds.default"),
    color!("activityBar.inactiveForeground" => ["ui.overrides.activityBar.inactiveForeground"] "ui.foregrounds.muted"),
    color!("activityBar.border" => ["ui.overrides.activityBar.border"] "ui.borders.subtle"),
    color!("activityBarBadge.background" => ["ui.overrides.activityBar.badgeBackground"] "ui.accent.primary"),
    color!("activityBarBadge.foreground" => ["ui.overrides.activityBar.badgeForeground"] "ui.accent.primaryForeground"),
    // side bar
    color!("sideBar.background" => ["ui.overrides.sideBar.background"] "ui.backgrounds.surface"),
    color!("sideBar.foreground" => ["ui.overrides.sideBar.foreground"] "ui.foregrounds.default"),
    color!("sideBar.border" => ["ui.overrides.sideBar.border"] "ui.borders.default"),
    color!("sideBarSectionHeader.background" => ["ui.overrides.sideBar.sectionHeaderBackground"] "ui.backgrounds.raised"),
    color!("sideBarSectionHeader.foreground" => ["ui.overrides.sideBar.sectionHeaderForeground"] "ui.foregrounds.default"),
    color!("gauge.border" => "ui.borders.subtle"),
    color!("sash.hoverBorder" => "ui.borders.active"),
    // panel
    color!("panel.background" => ["ui.overrides.panel.background"] "ui.backgrounds.surface"),
    color!("panel.foreground" => ["ui.overrides.panel.foreground"] "ui.foregrounds.default"),
    color!("panel.border" => ["ui.overrides.panel.border"] "ui.borders.default"),
    color!("panelTitle.activeForeground" => ["ui.overrides.panel.titleActiveForeground"] "ui.foregrounds.default"),
    color!("panelTitle.inactiveForeground" => ["ui.overrides.panel.titleInactiveForeground"] "ui.foregrounds.muted"),
    color!("panelTitle.activeBorder" => ["ui.overrides.panel.titleActiveBorder"] "ui.accent.primary"),
    // status bar
    color!("statusBar.background" => ["ui.overrides.statusBar.background"] "ui.backgrounds.base"),
    color!("statusBar.foreground" => ["ui.overrides.statusBar.foreground"] "ui.foregrounds.default"),
    color!("statusBar.border" => ["ui.overrides.statusBar.border"] "ui.borders.subtle"),
    color!("statusBar.debuggingBackground" => ["ui.overrides.statusBar.debuggingBackground"] "ui.status.warning"),
    color!("statusBar.debuggingForeground" => ["ui.overrides.statusBar.debuggingForeground"] "ui.foregrounds.default"),
    color!("statusBar.noFolderBackground" => ["ui.overrides.statusBar.noFolderBackground"] "ui.backgrounds.surface"),
    color!("statusBar.noFolderForeground" => ["ui.overrides.statusBar.noFolderForeground"] "ui.foregrounds.muted"),
    // tabs
    color!("tab.activeBackground" => ["ui.overrides.tabs.activeBackground"] "ui.backgrounds.surface"),
    color!("tab.activeForeground" => ["ui.overrides.tabs.activeForeground"] "ui.foregrounds.default"),
    color!("tab.activeBorder" => ["ui.overrides.tabs.activeBorder"] "ui.accent.primary"),
    color!("tab.activeBorderTop" => ["ui.overrides.tabs.activeBorderTop"] "ui.accent.primary"),
    color!("tab.inactiveBackground" => ["ui.overrides.tabs.inactiveBackground"] "ui.backgrounds.base"),
    color!("tab.inactiveForeground" => ["ui.overrides.tabs.inactiveForeground"] "ui.foregrounds.muted"),
    color!("tab.hoverBackground" => ["ui.overrides.tabs.hoverBackground"] "ui.backgrounds.raised"),
    color!("tab.hoverForeground" => ["ui.overrides.tabs.hoverForeground"] "ui.foregrounds.default"),
    color!("tab.unfocusedActiveBackground" => ["ui.overrides.tabs.unfocusedActiveBackground"] "ui.backgrounds.surface"),
    color!("tab.unfocusedActiveForeground" => ["ui.overrides.tabs.unfocusedActiveForeground"] "ui.foregrounds.muted"),
    color!("tab.lastPinnedBorder" => ["ui.overrides.tabs.modifiedBorder"] "ui.accent.primary"),
    // lists
    color!("list.activeSelectionBackground" => ["ui.overrides.list.activeSelectionBackground"] "ui.backgrounds.raised"),
    color!("list.activeSelectionForeground" => ["ui.overrides.list.activeSelectionForeground"] "ui.foregrounds.default"),
    color!("list.inactiveSelectionBackground" => ["ui.overrides.list.inactiveSelectionBackground"] "ui.backgrounds.raised"),
    color!("list.inactiveSelectionForeground" => ["ui.overrides.list.inactiveSelectionForeground"] "ui.foregrounds.muted"),
    color!("list.hoverBackground" => ["ui.overrides.list.hoverBackground"] "ui.backgrounds.raised"),
    color!("list.hoverForeground" => ["ui.overrides.list.hoverForeground"] "ui.foregrounds.default"),
    color!("list.focusBackground" => ["ui.overrides.list.focusBackground"] "ui.selection.background"),
    color!("list.focusForeground" => ["ui.overrides.list.focusForeground"] "ui.foregrounds.default"),
    color!("list.highlightForeground" => ["ui.overrides.list.highlightForeground"] "ui.foregrounds.accent"),
    // inputs and buttons
    color!("input.background" => ["ui.overrides.input.background"] "ui.backgrounds.raised"),
    color!("input.foreground" => ["ui.overrides.input.foreground"] "ui.foregrounds.default"),
    color!("input.border" => ["ui.overrides.input.border"] "ui.borders.default"),
    color!("input.placeholderForeground" => ["ui.overrides.input.placeholderForeground"] "ui.foregrounds.subtle"),
    color!("button.background" => ["ui.overrides.button.background"] "ui.accent.primary"),
    color!("button.foreground" => ["ui.overrides.button.foreground"] "ui.accent.primaryForeground"),
    color!("button.hoverBackground" => ["ui.overrides.button.hoverBackground"] "ui.accent.primary"),
    color!("button.secondaryBackground" => ["ui.overrides.button.secondaryBackground"] "ui.backgrounds.raised"),
    color!("button.secondaryForeground" => ["ui.overrides.button.secondaryForeground"] "ui.foregrounds.default"),
    color!("button.secondaryHoverBackground" => ["ui.overrides.button.secondaryHoverBackground"] "ui.backgrounds.overlay"),
    color!("dropdown.background" => ["ui.overrides.dropdown.background"] "ui.backgrounds.raised"),
    color!("dropdown.foreground" => ["ui.overrides.dropdown.foreground"] "ui.foregrounds.default"),
    color!("dropdown.border" => ["ui.overrides.dropdown.border"] "ui.borders.default"),
    color!("dropdown.listBackground" => ["ui.overrides.dropdown.listBackground"] "ui.backgrounds.raised"),
    color!("badge.background" => ["ui.overrides.badge.background"] "ui.accent.primary"),
    color!("badge.foreground" => ["ui.overrides.badge.foreground"] "ui.accent.primaryForeground"),
    // scrollbar and minimap
    color!("scrollbar.shadow" => ["ui.overrides.scrollbar.shadow"] "ui.backgrounds.base"),
    color!("scrollbarSlider.background" => ["ui.overrides.scrollbar.sliderBackground"] "ui.borders.subtle"),
    color!("scrollbarSlider.hoverBackground" => ["ui.overrides.scrollbar.sliderHoverBackground"] "ui.borders.default"),
    color!("scrollbarSlider.activeBackground" => ["ui.overrides.scrollbar.sliderActiveBackground"] "ui.borders.active"),
    color!("minimap.background" => ["ui.overrides.minimap.background"] "ui.backgrounds.surface"),
    color!("minimap.selectionHighlight" => ["ui.overrides.minimap.selectionHighlight"] "ui.selection.background"),
    color!("minimap.errorHighlight" => ["ui.overrides.minimap.errorHighlight"] "ui.status.error"),
    color!("minimap.warningHighlight" => ["ui.overrides.minimap.warningHighlight"] "ui.status.warning"),
    color!("minimap.findMatchHighlight" => ["ui.overrides.minimap.findMatchHighlight"] "ui.foregrounds.accent"),
    // breadcrumbs
    color!("breadcrumb.background" => ["ui.overrides.breadcrumb.background"] "ui.backgrounds.surface"),
    color!("breadcrumb.foreground" => ["ui.overrides.breadcrumb.foreground"] "ui.foregrounds.muted"),
    color!("breadcrumb.focusForeground" => ["ui.overrides.breadcrumb.focusForeground"] "ui.foregrounds.default"),
    color!("breadcrumb.activeSelectionForeground" => ["ui.overrides.breadcrumb.activeSelectionForeground"] "ui.foregrounds.default"),
    // terminal
    color!("terminal.background" => ["ui.overrides.terminal.background"] "ui.backgrounds.surface"),
    color!("terminal.foreground" => ["ui.overrides.terminal.foreground"] "ui.foregrounds.default"),
    color!("terminalCursor.foreground" => ["ui.overrides.terminal.cursor"] "ui.accent.primary"),
    color!("terminal.selectionBackground" => ["ui.overrides.terminal.selectionBackground"] "ui.selection.background"),
    color!("terminal.ansiBlack" => ["ui.overrides.terminal.ansiBlack"] "ui.backgrounds.base"),
    color!("terminal.ansiRed" => ["ui.overrides.terminal.ansiRed"] "ui.status.error"),
    color!("terminal.ansiGreen" => ["ui.overrides.terminal.ansiGreen"] "ui.status.success"),
    color!("terminal.ansiYellow" => ["ui.overrides.terminal.ansiYellow"] "ui.status.warning"),
    color!("terminal.ansiBlue" => ["ui.overrides.terminal.ansiBlue"] "ui.status.info"),
    color!("terminal.ansiMagenta" => ["ui.overrides.terminal.ansiMagenta"] "ui.accent.primary"),
    color!("terminal.ansiCyan" => ["ui.overrides.terminal.ansiCyan"] "ui.foregrounds.accent"),
    color!("terminal.ansiWhite" => ["ui.overrides.terminal.ansiWhite"] "ui.foregrounds.default"),
    color!("terminal.ansiBrightBlack" => ["ui.overrides.terminal.ansiBrightBlack"] "ui.foregrounds.muted"),
    color!("terminal.ansiBrightRed" => ["ui.overrides.terminal.ansiBrightRed"] "ui.status.error"),
    color!("terminal.ansiBrightGreen" => ["ui.overrides.terminal.ansiBrightGreen"] "ui.status.success"),
    color!("terminal.ansiBrightYellow" => ["ui.overrides.terminal.ansiBrightYellow"] "ui.status.warning"),
    color!("terminal.ansiBrightBlue" => ["ui.overrides.terminal.ansiBrightBlue"] "ui.status.info"),
    color!("terminal.ansiBrightMagenta" => ["ui.overrides.terminal.ansiBrightMagenta"] "ui.accent.primary"),
    color!("terminal.ansiBrightCyan" => ["ui.overrides.terminal.ansiBrightCyan"] "ui.foregrounds.accent"),
    color!("terminal.ansiBrightWhite" => ["ui.overrides.terminal.ansiBrightWhite"] "ui.foregrounds.default"),
    // notifications and peek view
    color!("notifications.background" => ["ui.overrides.notification.background"] "ui.backgrounds.overlay"),
    color!("notifications.foreground" => ["ui.overrides.notification.foreground"] "ui.foregrounds.default"),
    color!("notifications.border" => ["ui.overrides.notification.border"] "ui.borders.default"),
    color!("peekViewEditor.background" => ["ui.overrides.peekView.editorBackground"] "ui.backgrounds.surface"),
    color!("peekView.border" => ["ui.overrides.peekView.editorBorder"] "ui.borders.default"),
    color!("peekViewResult.background" => ["ui.overrides.peekView.resultBackground"] "ui.backgrounds.raised"),
    color!("peekViewResult.selectionBackground" => ["ui.overrides.peekView.resultSelectionBackground"] "ui.selection.background"),
    color!("peekViewTitle.background" => ["ui.overrides.peekView.titleBackground"] "ui.backgrounds.raised"),
    color!("peekViewTitleLabel.foreground" => ["ui.overrides.peekView.titleForeground"] "ui.foregrounds.default"),
    // diff and merge
    color!("diffEditor.insertedTextBackground" => ["ui.overrides.diffEditor.insertedTextBackground"] "ui.git.added"),
    color!("diffEditor.removedTextBackground" => ["ui.overrides.diffEditor.removedTextBackground"] "ui.git.deleted"),
    color!("diffEditor.insertedLineBackground" => ["ui.overrides.diffEditor.insertedLineBackground"] "ui.git.added"),
    color!("diffEditor.removedLineBackground" => ["ui.overrides.diffEditor.removedLineBackground"] "ui.git.deleted"),
    color!("diffEditor.diagonalFill" => ["ui.overrides.diffEditor.diagonalFill"] "ui.borders.subtle"),
    color!("merge.currentHeaderBackground" => ["ui.overrides.merge.currentHeaderBackground"] "ui.status.info"),
    color!("merge.currentContentBackground" => ["ui.overrides.merge.currentContentBackground"] "ui.backgrounds.raised"),
    color!("merge.incomingHeaderBackground" => ["ui.overrides.merge.incomingHeaderBackground"] "ui.status.success"),
    color!("merge.incomingContentBackground" => ["ui.overrides.merge.incomingContentBackground"] "ui.backgrounds.raised"),
    color!("merge.commonHeaderBackground" => ["ui.overrides.merge.commonHeaderBackground"] "ui.backgrounds.raised"),
    color!("merge.commonContentBackground" => ["ui.overrides.merge.commonContentBackground"] "ui.backgrounds.raised"),
    // git decorations
    color!("gitDecoration.addedResourceForeground" => "ui.git.added"),
    color!("gitDecoration.modifiedResourceForeground" => "ui.git.modified"),
    color!("gitDecoration.deletedResourceForeground" => "ui.git.deleted"),
    color!("gitDecoration.untrackedResourceForeground" => ["ui.git.untracked"] "ui.foregrounds.muted"),
    color!("gitDecoration.ignoredResourceForeground" => ["ui.git.ignored"] "ui.foregrounds.subtle"),
    color!("gitDecoration.conflictingResourceForeground" => ["ui.git.conflict"] "ui.status.warning"),
    // global
    color!("focusBorder" => ["ui.overrides.focusBorder"] "ui.borders.active"),
    color!("foreground" => "ui.foregrounds.default"),
];

const SYNTAX: &[SyntaxRule] = &[
    syntax!("source" => "tokens.source"),
    syntax!("text" => "tokens.source"),
    // comments
    syntax!("comment" => "tokens.comments", "italic"),
    syntax!("punctuation.definition.comment" => "tokens.comments", "italic"),
    // strings
    syntax!("string" => "tokens.strings"),
    syntax!("string.regexp" => "tokens.strings.regex", "italic"),
    syntax!("constant.character.escape" => "tokens.literals.string"),
    syntax!("constant.other.placeholder" => "tokens.literals.string"),
    syntax!("punctuation.definition.template-expression" => "tokens.literals.string"),
    syntax!("meta.template.expression" => "tokens.literals.string"),
    // constants and literals
    syntax!("constant" => "tokens.constants"),
    syntax!("constant.numeric" => "tokens.literals.number"),
    syntax!("constant.language" => "tokens.literals.boolean"),
    // keywords and operators
    syntax!("keyword" => "tokens.keywords"),
    syntax!("keyword.control" => "tokens.keywords.control"),
    syntax!("keyword.control.conditional" => "tokens.keywords.control"),
    syntax!("keyword.control.loop" => "tokens.keywords.control"),
    syntax!("keyword.control.flow" => "tokens.keywords.control"),
    syntax!("keyword.control.import" => "tokens.keywords.import"),
    syntax!("keyword.control.export" => "tokens.keywords.import"),
    syntax!("keyword.operator" => "tokens.operators"),
    syntax!("keyword.operator.logical" => "tokens.operators.logical"),
    syntax!("keyword.operator.assignment" => "tokens.operators.assignment"),
    syntax!("keyword.operator.arithmetic" => "tokens.operators.arithmetic"),
    syntax!("keyword.operator.comparison" => "tokens.operators.comparison"),
    syntax!("keyword.operator.wordlike" => "tokens.operators.wordlike"),
    // storage
    syntax!("storage" => "tokens.storage"),
    syntax!("storage.type" => "tokens.storage.type"),
    syntax!("storage.type.function" => "tokens.keywords.declaration"),
    syntax!("storage.type.class" => "tokens.keywords.declaration"),
    syntax!("storage.modifier" => "tokens.keywords.modifier"),
    syntax!("storage.type.primitive" => "tokens.types.primitive"),
    // variables
    syntax!("variable" => "tokens.variables"),
    syntax!("variable.other" => "tokens.variables.other"),
    syntax!("variable.parameter" => "tokens.variables.parameter", "italic"),
    syntax!("variable.language" => "tokens.variables.global", "italic"),
    syntax!("variable.language.this" => "tokens.variables.global", "italic"),
    syntax!("variable.language.super" => "tokens.variables.global", "italic"),
    // functions
    syntax!("entity.name.function" => "tokens.functions"),
    syntax!("support.function" => "tokens.functions.builtin"),
    syntax!("meta.function-call.generic" => "tokens.functions.call"),
    // classes and types
    syntax!("entity.name.class" => "tokens.types.class", "bold underline"),
    syntax!("entity.other.inherited-class" => "tokens.types.class", "bold underline"),
    syntax!("support.class" => "tokens.types.class"),
    syntax!("entity.name.type" => "tokens.types"),
    syntax!("support.type" => "tokens.types"),
    // tags and attributes
    syntax!("entity.name.tag" => "tokens.meta.tag"),
    syntax!("support.class.component" => "tokens.types.class"),
    syntax!("entity.other.attribute-name" => "tokens.variables.property"),
    syntax!("meta.tag.attributes" => "tokens.variables.property"),
    // properties
    syntax!("support.type.property-name" => "tokens.variables.property"),
    syntax!("support.type.property-name.css" => "tokens.variables.property"),
    syntax!("meta.object-literal.key" => "tokens.variables.property"),
    syntax!("variable.other.property" => "tokens.variables.property"),
    // css
    syntax!("meta.property-name" => "tokens.variables.property"),
    syntax!("meta.property-list.css" => "tokens.variables.property"),
    syntax!("support.constant.property-value" => "tokens.literals"),
    syntax!("constant.other.color" => "tokens.literals"),
    syntax!("meta.property-value" => "tokens.literals"),
    syntax!("meta.selector" => "tokens.types"),
    syntax!("entity.name.tag.css" => "tokens.types"),
    syntax!("entity.other.attribute-name.class.css" => "tokens.types"),
    syntax!("entity.other.attribute-name.id.css" => "tokens.types"),
    // punctuation
    syntax!("punctuation" => "tokens.punctuation"),
    syntax!("punctuation.definition" => "tokens.punctuation.definition"),
    syntax!("punctuation.separator" => "tokens.punctuation.delimiter"),
    syntax!("punctuation.terminator" => "tokens.punctuation.delimiter"),
    syntax!("punctuation.accessor" => "tokens.punctuation.accessor"),
    syntax!("punctuation.definition.tag" => "tokens.punctuation.definition"),
    syntax!("meta.brace" => "tokens.punctuation.bracket"),
    syntax!("meta.brace.round" => "tokens.punctuation.bracket"),
    syntax!("meta.brace.square" => "tokens.punctuation.bracket"),
    syntax!("meta.brace.curly" => "tokens.punctuation.bracket"),
    // decorators
    syntax!("entity.name.function.decorator" => "tokens.meta.decorator"),
    syntax!("punctuation.definition.decorator" => "tokens.meta.decorator"),
    // markdown
    syntax!("markup.heading" => "tokens.types", "bold"),
    syntax!("entity.name.section.markdown" => "tokens.types", "bold"),
    syntax!("markup.bold" => "tokens.keywords", "bold"),
    syntax!("markup.italic" => "tokens.strings", "italic"),
    syntax!("markup.inline.raw" => "tokens.literals.string"),
    syntax!("markup.fenced_code.block.markdown" => "tokens.literals.string"),
    syntax!("markup.quote" => "tokens.comments", "italic"),
    syntax!("markup.underline.link" => "tokens.functions", "underline"),
    // diffs
    syntax!("markup.inserted" => "ui.git.added"),
    syntax!("markup.inserted.git_gutter" => "ui.git.added"),
    syntax!("markup.changed" => "ui.git.modified"),
    syntax!("markup.changed.git_gutter" => "ui.git.modified"),
    syntax!("markup.deleted" => "ui.git.deleted"),
    syntax!("markup.deleted.git_gutter" => "ui.git.deleted"),
    // invalid
    syntax!("invalid" => "ui.status.error"),
    syntax!("invalid.illegal" => "ui.status.error"),
    syntax!("invalid.deprecated" => "tokens.comments"),
    // TODO / FIXME / NOTE markers
    syntax!("comment.line.todo" => "tokens.meta.annotation", "bold"),
    syntax!("comment.block.todo" => "tokens.meta.annotation", "bold"),
    syntax!("comment.line.fixme" => "ui.status.warning", "bold"),
    syntax!("comment.block.fixme" => "ui.status.warning", "bold"),
    syntax!("comment.line.note" => "ui.status.info", "bold"),
    syntax!("comment.block.note" => "ui.status.info", "bold"),
    // python docstrings
    syntax!("string.quoted.docstring" => "tokens.comments", "italic"),
    syntax!("string.quoted.docstring.multi.python" => "tokens.comments", "italic"),
    syntax!("string.quoted.docstring.raw.multi.python" => "tokens.comments", "italic"),
    // yaml and json
    syntax!("source.yaml" => "tokens.source"),
    syntax!("entity.name.tag.yaml" => "tokens.variables.property"),
    syntax!("string.unquoted.plain.out.yaml" => "tokens.strings"),
    syntax!("string.quoted.single.yaml" => "tokens.strings"),
    syntax!("meta.structure.dictionary.key.json" => "tokens.variables.property"),
    syntax!("support.type.property-name.json" => "tokens.variables.property"),
    syntax!("meta.structure.dictionary.value.json" => "tokens.strings"),
];

const SEMANTIC: &[SemanticEntry] = &[
    semantic!("comment" => "tokens.comments"),
    semantic!("string" => "tokens.strings"),
    semantic!("number" => "tokens.literals.number"),
    semantic!("regexp" => "tokens.literals.regex"),
    semantic!("keyword" => "tokens.keywords"),
    semantic!("operator" => "tokens.operators"),
    semantic!("variable" => "tokens.variables"),
    semantic!("parameter" => "tokens.variables.parameter"),
    semantic!("property" => "tokens.variables.property"),
    semantic!("function" => "tokens.functions"),
    semantic!("method" => "tokens.functions.method"),
    semantic!("class" => "tokens.types.class"),
    semantic!("interface" => "tokens.types.interface"),
    semantic!("enum" => "tokens.types.enum"),
    semantic!("enumMember" => "tokens.constants"),
    semantic!("type" => "tokens.types"),
    semantic!("typeParameter" => "tokens.types.typeParameter"),
    semantic!("namespace" => "tokens.types.namespace"),
    semantic!("decorator" => "tokens.meta.decorator"),
    semantic!("macro" => "tokens.meta.macro"),
];
