//! Zed theme families.
//!
//! Zed has no base-theme migration: [`generate`] always produces the whole
//! file. Style keys read the same theme paths as VS Code where an
//! equivalent exists; the rest derive translucent variants with alpha.

use indexmap::IndexMap;
use serde::Serialize;

use crate::cascade::{ColorSource, ResolvedTokens};
use crate::color::Color;
use crate::error::Result;
use crate::filter::FilterConfig;
use crate::scope::{resolve_filtered, ColorEntry, Lookup};
use crate::theme::{ThemeDefinition, Variant};

pub const SCHEMA: &str = "https://zed.dev/schema/themes/v0.2.0.json";

// ─── File format ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZedThemeFile {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    pub author: String,
    pub themes: Vec<ZedTheme>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZedTheme {
    pub name: String,
    pub appearance: Variant,
    pub style: ZedStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZedStyle {
    #[serde(rename = "background.appearance")]
    pub background_appearance: String,
    pub accents: Vec<Color>,
    #[serde(flatten)]
    pub colors: IndexMap<String, Color>,
    pub players: Vec<ZedPlayer>,
    pub syntax: IndexMap<String, ZedSyntaxStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZedPlayer {
    pub cursor: Color,
    pub background: Color,
    pub selection: Color,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ZedSyntaxStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
}

// ─── Generation ─────────────────────────────────────────────────────────────

/// Builds a single-theme family for `theme`.
///
/// Filters apply to every resolved color, palette preferences included.
/// Fixed constants such as the transparent track color are emitted as is.
pub fn generate(theme: &ThemeDefinition, filters: &FilterConfig, author: &str) -> Result<ZedThemeFile> {
    let resolved = resolve_filtered(theme, sources(), filters)?;

    let colors = COLORS
        .iter()
        .filter_map(|entry| entry.color(&resolved).map(|c| (entry.key().to_string(), c)))
        .collect();

    let players: Vec<ZedPlayer> = PLAYERS
        .iter()
        .filter_map(|lookup| lookup.find(&resolved))
        .map(|color| ZedPlayer {
            cursor: color,
            background: color,
            selection: color.with_alpha(0.25),
        })
        .collect();
    let accents = players.iter().map(|p| p.cursor).collect();

    let syntax = SYNTAX
        .iter()
        .map(|rule| {
            let style = ZedSyntaxStyle {
                color: rule.lookup.and_then(|l| l.find(&resolved)),
                font_style: rule.font_style,
                font_weight: rule.font_weight,
            };
            (rule.key.to_string(), style)
        })
        .collect();

    Ok(ZedThemeFile {
        schema: SCHEMA.to_string(),
        name: format!("{} Theme Family", theme.name),
        author: author.to_string(),
        themes: vec![ZedTheme {
            name: theme.name.clone(),
            appearance: theme.variant,
            style: ZedStyle {
                background_appearance: "opaque".to_string(),
                accents,
                colors,
                players,
                syntax,
            },
        }],
    })
}

fn sources() -> Vec<ColorSource> {
    let mut sources = Vec::new();
    for entry in COLORS {
        match entry {
            StyleColor::Mapped(e) => sources.extend(e.lookup.sources()),
            StyleColor::Preferred(name, e) => {
                sources.push(ColorSource::Exact(palette_path(name)));
                sources.extend(e.lookup.sources());
            }
            StyleColor::Fixed(..) => {}
        }
    }
    for rule in SYNTAX {
        if let Some(lookup) = &rule.lookup {
            sources.extend(lookup.sources());
        }
    }
    for lookup in PLAYERS {
        sources.extend(lookup.sources());
    }
    sources
}

fn palette_path(name: &str) -> String {
    format!("palette.{}", name)
}

// ─── Mapping tables ─────────────────────────────────────────────────────────

/// One flat color key of a Zed `style`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StyleColor {
    Mapped(ColorEntry),
    /// The named palette entry when the theme has one, the entry otherwise.
    /// The entry's op only applies to the fallback.
    Preferred(&'static str, ColorEntry),
    Fixed(&'static str, Color),
}

impl StyleColor {
    fn key(&self) -> &'static str {
        match self {
            StyleColor::Mapped(e) | StyleColor::Preferred(_, e) => e.key,
            StyleColor::Fixed(key, _) => *key,
        }
    }

    fn color(&self, resolved: &ResolvedTokens) -> Option<Color> {
        match self {
            StyleColor::Mapped(e) => e.color(resolved),
            StyleColor::Preferred(name, e) => resolved
                .exact(&palette_path(name))
                .or_else(|| e.color(resolved)),
            StyleColor::Fixed(_, color) => Some(*color),
        }
    }
}

const fn color(key: &'static str, lookup: Lookup) -> StyleColor {
    StyleColor::Mapped(ColorEntry::new(key, lookup))
}

const fn faded(key: &'static str, lookup: Lookup, alpha: f64) -> StyleColor {
    StyleColor::Mapped(ColorEntry::alpha(key, lookup, alpha))
}

const fn prefer(name: &'static str, entry: ColorEntry) -> StyleColor {
    StyleColor::Preferred(name, entry)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SyntaxStyleRule {
    key: &'static str,
    lookup: Option<Lookup>,
    font_style: Option<&'static str>,
    font_weight: Option<u16>,
}

const fn syntax(key: &'static str, lookup: Lookup) -> SyntaxStyleRule {
    SyntaxStyleRule {
        key,
        lookup: Some(lookup),
        font_style: None,
        font_weight: None,
    }
}

const fn italic(key: &'static str, lookup: Lookup) -> SyntaxStyleRule {
    SyntaxStyleRule {
        font_style: Some("italic"),
        ..syntax(key, lookup)
    }
}

const fn bold(key: &'static str, lookup: Lookup) -> SyntaxStyleRule {
    SyntaxStyleRule {
        font_weight: Some(700),
        ..syntax(key, lookup)
    }
}

const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
const WHITE: Color = Color::rgb(255, 255, 255);

// Shared lookups.
const BACKGROUND: Lookup = Lookup::first(&["ui.backgrounds.base"], "background");
const SURFACE: Lookup = Lookup::first(&["ui.backgrounds.surface"], "background");
const RAISED: Lookup = Lookup::first(&["ui.backgrounds.raised", "ui.backgrounds.surface"], "background");
const OVERLAY: Lookup = Lookup::first(&["ui.backgrounds.overlay", "ui.backgrounds.raised"], "background");
const FOREGROUND: Lookup = Lookup::at("ui.foregrounds.default");
const MUTED: Lookup = Lookup::at("ui.foregrounds.muted");
const SUBTLE: Lookup = Lookup::first(&["ui.foregrounds.subtle"], "ui.foregrounds.muted");
const ACCENT: Lookup = Lookup::first(&["ui.foregrounds.accent"], "ui.accent.primary");
const BORDER_DEFAULT: Lookup = Lookup::at("ui.borders.default");
const BORDER_ACTIVE: Lookup = Lookup::first(&["ui.borders.active"], "ui.borders.default");
const BORDER_SUBTLE: Lookup = Lookup::first(&["ui.borders.subtle"], "ui.borders.default");
const ERROR: Lookup = Lookup::at("ui.status.error");
const WARNING: Lookup = Lookup::at("ui.status.warning");
const INFO: Lookup = Lookup::at("ui.status.info");
const SUCCESS: Lookup = Lookup::at("ui.status.success");
const PREDICTIVE: Lookup = Lookup::first(&["tokens.variables.parameter"], "ui.foregrounds.muted");
const GIT_ADDED: Lookup = Lookup::first(&["ui.git.added"], "ui.status.success");
const GIT_MODIFIED: Lookup = Lookup::first(&["ui.git.modified"], "ui.status.warning");
const GIT_DELETED: Lookup = Lookup::first(&["ui.git.deleted"], "ui.status.error");
const GIT_IGNORED: Lookup = Lookup::first(&["ui.git.ignored"], "ui.foregrounds.muted");
const GIT_CONFLICT: Lookup = Lookup::first(&["ui.git.conflict"], "ui.status.error");
const STATUS_BAR: Lookup = Lookup::first(&["ui.overrides.statusBar.background", "ui.backgrounds.base"], "background");
const LINE_HIGHLIGHT: Lookup = Lookup::first(&["ui.overrides.editor.lineHighlight"], "ui.selection.background");
const SELECTED: Lookup = Lookup::first(
    &["palette.listActive", "ui.backgrounds.overlay", "ui.backgrounds.raised"],
    "background",
);

const ANSI_BLACK: Lookup = Lookup::first(&["ui.overrides.terminal.ansiBlack"], "ui.backgrounds.base");
const ANSI_RED: Lookup = Lookup::first(&["ui.overrides.terminal.ansiRed"], "ui.status.error");
const ANSI_GREEN: Lookup = Lookup::first(&["ui.overrides.terminal.ansiGreen"], "ui.status.success");
const ANSI_YELLOW: Lookup = Lookup::first(&["ui.overrides.terminal.ansiYellow"], "ui.status.warning");
const ANSI_BLUE: Lookup = Lookup::first(&["ui.overrides.terminal.ansiBlue"], "ui.status.info");
const ANSI_MAGENTA: Lookup = Lookup::first(&["ui.overrides.terminal.ansiMagenta"], "ui.accent.primary");
const ANSI_CYAN: Lookup = Lookup::first(&["ui.overrides.terminal.ansiCyan"], "ui.foregrounds.accent");
const ANSI_WHITE: Lookup = Lookup::first(&["ui.overrides.terminal.ansiWhite"], "ui.foregrounds.default");

/// Collaborator colors, also used as the accent rotation.
const PLAYERS: &[Lookup] = &[ANSI_BLUE, ANSI_MAGENTA, ANSI_CYAN, ANSI_GREEN, ANSI_YELLOW, ERROR];

const COLORS: &[StyleColor] = &[
    color("background", BACKGROUND),
    // borders
    prefer("focusBorder", ColorEntry::alpha("border", BORDER_DEFAULT, 0.08)),
    faded("border.variant", BORDER_SUBTLE, 0.6),
    color("border.focused", BORDER_ACTIVE),
    prefer("focusBorder", ColorEntry::alpha("border.selected", BORDER_DEFAULT, 0.08)),
    StyleColor::Fixed("border.transparent", TRANSPARENT),
    faded("border.disabled", BORDER_SUBTLE, 0.6),
    // surfaces
    color("elevated_surface.background", RAISED),
    color("surface.background", SURFACE),
    // elements
    prefer("elementBg", ColorEntry::alpha("element.background", RAISED, 0.25)),
    prefer("elementHover", ColorEntry::alpha("element.hover", RAISED, 0.33)),
    prefer("elementBg", ColorEntry::alpha("element.active", RAISED, 0.25)),
    color("element.selected", SELECTED),
    faded("element.disabled", SUBTLE, 0.33),
    faded("drop_target.background", OVERLAY, 0.13),
    StyleColor::Fixed("ghost_element.background", TRANSPARENT),
    faded("ghost_element.hover", SELECTED, 0.25),
    prefer("elementBg", ColorEntry::alpha("ghost_element.active", RAISED, 0.25)),
    color("ghost_element.selected", SELECTED),
    faded("ghost_element.disabled", SUBTLE, 0.33),
    // text
    color("text", FOREGROUND),
    color("text.muted", MUTED),
    faded("text.placeholder", SUBTLE, 0.27),
    faded("text.disabled", SUBTLE, 0.62),
    faded("text.accent", ACCENT, 0.83),
    // icons
    prefer("steel", ColorEntry::new("icon", FOREGROUND)),
    prefer("iconMuted", ColorEntry::new("icon.muted", MUTED)),
    faded("icon.disabled", SUBTLE, 0.62),
    faded("icon.placeholder", SUBTLE, 0.27),
    faded("icon.accent", ACCENT, 0.83),
    // chrome
    color("status_bar.background", STATUS_BAR),
    color("title_bar.background", STATUS_BAR),
    color("title_bar.inactive_background", STATUS_BAR),
    color("toolbar.background", STATUS_BAR),
    color("tab_bar.background", STATUS_BAR),
    color(
        "tab.inactive_background",
        Lookup::first(&["ui.overrides.tabs.inactiveBackground", "ui.backgrounds.surface"], "background"),
    ),
    color(
        "tab.active_background",
        Lookup::first(&["ui.overrides.tabs.activeBackground", "ui.backgrounds.surface"], "background"),
    ),
    color(
        "search.match_background",
        Lookup::first(&["ui.overrides.editor.findMatch"], "ui.selection.background"),
    ),
    color(
        "panel.background",
        Lookup::first(&["ui.overrides.panel.background", "ui.backgrounds.surface"], "background"),
    ),
    color(
        "panel.focused_border",
        Lookup::first(&["ui.overrides.panel.border"], "ui.borders.default"),
    ),
    prefer("focusBorder", ColorEntry::alpha("pane.focused_border", BORDER_DEFAULT, 0.08)),
    // scrollbar
    faded(
        "scrollbar.thumb.background",
        Lookup::first(&["ui.overrides.scrollbar.sliderBackground"], "ui.borders.subtle"),
        0.25,
    ),
    faded(
        "scrollbar.thumb.hover_background",
        Lookup::first(&["ui.overrides.scrollbar.sliderHoverBackground"], "ui.borders.default"),
        0.5,
    ),
    prefer("scrollbarBorder", ColorEntry::new("scrollbar.thumb.border", BORDER_DEFAULT)),
    StyleColor::Fixed("scrollbar.track.background", TRANSPARENT),
    StyleColor::Fixed("scrollbar.track.border", TRANSPARENT),
    // editor
    color(
        "editor.foreground",
        Lookup::first(&["ui.overrides.editor.foreground"], "ui.foregrounds.default"),
    ),
    color(
        "editor.background",
        Lookup::first(&["ui.overrides.editor.background", "ui.backgrounds.surface"], "background"),
    ),
    color(
        "editor.gutter.background",
        Lookup::first(&["ui.overrides.editorGutter.background", "ui.backgrounds.surface"], "background"),
    ),
    color("editor.subheader.background", RAISED),
    color("editor.active_line.background", LINE_HIGHLIGHT),
    color("editor.highlighted_line.background", LINE_HIGHLIGHT),
    color(
        "editor.line_number",
        Lookup::first(&["ui.overrides.editorLineNumber.foreground"], "ui.foregrounds.muted"),
    ),
    color(
        "editor.active_line_number",
        Lookup::first(&["ui.overrides.editorLineNumber.activeForeground"], "ui.foregrounds.default"),
    ),
    prefer("whitespace", ColorEntry::new("editor.invisible", BORDER_SUBTLE)),
    prefer("ruler", ColorEntry::alpha("editor.wrap_guide", BORDER_DEFAULT, 0.13)),
    prefer("indentGuideActive", ColorEntry::alpha("editor.active_wrap_guide", BORDER_ACTIVE, 0.86)),
    color(
        "editor.document_highlight.read_background",
        Lookup::first(&["ui.overrides.editor.wordHighlight"], "ui.selection.background"),
    ),
    color(
        "editor.document_highlight.write_background",
        Lookup::first(&["ui.overrides.editor.wordHighlightStrong"], "ui.selection.background"),
    ),
    // terminal
    color(
        "terminal.background",
        Lookup::first(&["ui.overrides.terminal.background", "ui.backgrounds.surface"], "background"),
    ),
    color(
        "terminal.foreground",
        Lookup::first(&["ui.overrides.terminal.foreground"], "ui.foregrounds.default"),
    ),
    StyleColor::Fixed("terminal.bright_foreground", WHITE),
    color("terminal.dim_foreground", MUTED),
    color("terminal.ansi.black", ANSI_BLACK),
    color(
        "terminal.ansi.bright_black",
        Lookup::first(&["ui.overrides.terminal.ansiBrightBlack"], "ui.foregrounds.muted"),
    ),
    color("terminal.ansi.dim_black", ANSI_BLACK),
    color("terminal.ansi.red", ANSI_RED),
    color(
        "terminal.ansi.bright_red",
        Lookup::first(&["ui.overrides.terminal.ansiBrightRed"], "ui.status.error"),
    ),
    color("terminal.ansi.dim_red", ANSI_RED),
    color("terminal.ansi.green", ANSI_GREEN),
    color(
        "terminal.ansi.bright_green",
        Lookup::first(&["ui.overrides.terminal.ansiBrightGreen"], "ui.status.success"),
    ),
    color("terminal.ansi.dim_green", ANSI_GREEN),
    color("terminal.ansi.yellow", ANSI_YELLOW),
    color(
        "terminal.ansi.bright_yellow",
        Lookup::first(&["ui.overrides.terminal.ansiBrightYellow"], "ui.status.warning"),
    ),
    color("terminal.ansi.dim_yellow", ANSI_YELLOW),
    color("terminal.ansi.blue", ANSI_BLUE),
    color(
        "terminal.ansi.bright_blue",
        Lookup::first(&["ui.overrides.terminal.ansiBrightBlue"], "ui.status.info"),
    ),
    color("terminal.ansi.dim_blue", ANSI_BLUE),
    color("terminal.ansi.magenta", ANSI_MAGENTA),
    color(
        "terminal.ansi.bright_magenta",
        Lookup::first(&["ui.overrides.terminal.ansiBrightMagenta"], "ui.accent.primary"),
    ),
    color("terminal.ansi.dim_magenta", ANSI_MAGENTA),
    color("terminal.ansi.cyan", ANSI_CYAN),
    color(
        "terminal.ansi.bright_cyan",
        Lookup::first(&["ui.overrides.terminal.ansiBrightCyan"], "ui.foregrounds.accent"),
    ),
    color("terminal.ansi.dim_cyan", ANSI_CYAN),
    color("terminal.ansi.white", ANSI_WHITE),
    color(
        "terminal.ansi.bright_white",
        Lookup::first(&["ui.overrides.terminal.ansiBrightWhite"], "ui.foregrounds.default"),
    ),
    color("terminal.ansi.dim_white", ANSI_WHITE),
    // links and status
    prefer("linkGreen", ColorEntry::new("link_text.hover", INFO)),
    color("conflict", GIT_CONFLICT),
    faded("conflict.background", GIT_CONFLICT, 0.25),
    color("conflict.border", GIT_CONFLICT),
    color("created", GIT_ADDED),
    faded("created.background", GIT_ADDED, 0.13),
    color("created.border", GIT_ADDED),
    color("deleted", GIT_DELETED),
    faded("deleted.background", GIT_DELETED, 0.08),
    color("deleted.border", GIT_DELETED),
    color("error", ERROR),
    faded("error.background", ERROR, 0.27),
    color("error.border", ERROR),
    color("hidden", GIT_IGNORED),
    faded("hidden.background", GIT_IGNORED, 0.25),
    color("hidden.border", GIT_IGNORED),
    color("hint", INFO),
    faded("hint.background", INFO, 0.25),
    color("hint.border", INFO),
    color("ignored", GIT_IGNORED),
    faded("ignored.background", GIT_IGNORED, 0.25),
    color("ignored.border", GIT_IGNORED),
    color("info", INFO),
    faded("info.background", INFO, 0.25),
    color("info.border", INFO),
    color("modified", GIT_MODIFIED),
    faded("modified.background", GIT_MODIFIED, 0.25),
    color("modified.border", GIT_MODIFIED),
    color("predictive", PREDICTIVE),
    faded("predictive.background", PREDICTIVE, 0.25),
    color("predictive.border", PREDICTIVE),
    color("renamed", GIT_ADDED),
    faded("renamed.background", GIT_ADDED, 0.25),
    color("renamed.border", GIT_ADDED),
    color("success", SUCCESS),
    faded("success.background", SUCCESS, 0.25),
    color("success.border", SUCCESS),
    color("unreachable", SUBTLE),
    faded("unreachable.background", SUBTLE, 0.25),
    color("unreachable.border", SUBTLE),
    color("warning", WARNING),
    faded("warning.background", WARNING, 0.25),
    color("warning.border", WARNING),
];

const TYPE_OR_ORCHID: Lookup = Lookup::first(&["tokens.types", "palette.lightOrchid"], "ui.foregrounds.default");
const STRINGS: Lookup = Lookup::only(&["tokens.strings"]);
const PUNCTUATION: Lookup = Lookup::only(&["tokens.punctuation"]);
const KEYWORDS: Lookup = Lookup::only(&["tokens.keywords"]);
const SOURCE: Lookup = Lookup::only(&["tokens.source"]);
const COMMENTS: Lookup = Lookup::only(&["tokens.comments"]);
const ENUM: Lookup = Lookup::first(
    &["tokens.types.enum", "tokens.types", "palette.lightOrchid"],
    "ui.foregrounds.default",
);

const SYNTAX: &[SyntaxStyleRule] = &[
    syntax(
        "attribute",
        Lookup::only(&["palette.coral", "tokens.meta.decorator", "tokens.meta"]),
    ),
    syntax("boolean", Lookup::only(&["tokens.literals.boolean", "tokens.literals"])),
    italic("comment", COMMENTS),
    italic("comment.doc", COMMENTS),
    syntax("constant", Lookup::only(&["tokens.constants"])),
    syntax(
        "constructor",
        Lookup::first(
            &["tokens.types.class", "tokens.types", "palette.lightOrchid"],
            "ui.foregrounds.default",
        ),
    ),
    syntax("embedded", SOURCE),
    SyntaxStyleRule {
        key: "emphasis",
        lookup: None,
        font_style: Some("italic"),
        font_weight: None,
    },
    SyntaxStyleRule {
        key: "emphasis.strong",
        lookup: None,
        font_style: None,
        font_weight: Some(700),
    },
    syntax("enum", ENUM),
    syntax("function", Lookup::only(&["tokens.functions.call", "tokens.functions"])),
    syntax("function.method", Lookup::only(&["tokens.functions.method", "tokens.functions"])),
    syntax(
        "function.definition",
        Lookup::only(&["tokens.functions.declaration", "tokens.functions"]),
    ),
    bold("hint", INFO),
    syntax("keyword", KEYWORDS),
    syntax("label", Lookup::only(&["tokens.meta.label", "tokens.keywords"])),
    italic("link_text", INFO),
    syntax("link_uri", INFO),
    syntax("number", Lookup::only(&["tokens.literals.number", "tokens.literals"])),
    syntax(
        "operator",
        Lookup::first(&["tokens.operators", "palette.razzmatazz"], "ui.foregrounds.default"),
    ),
    italic("predictive", PREDICTIVE),
    syntax("preproc", KEYWORDS),
    syntax("primary", SOURCE),
    syntax(
        "property",
        Lookup::only(&["tokens.variables.property", "tokens.variables"]),
    ),
    syntax("punctuation", PUNCTUATION),
    syntax(
        "punctuation.bracket",
        Lookup::only(&["tokens.punctuation.bracket", "tokens.punctuation"]),
    ),
    syntax(
        "punctuation.delimiter",
        Lookup::only(&["tokens.punctuation.delimiter", "tokens.punctuation"]),
    ),
    syntax("punctuation.list_marker", PUNCTUATION),
    syntax(
        "punctuation.special",
        Lookup::only(&["tokens.punctuation.accessor", "tokens.punctuation"]),
    ),
    syntax("string", Lookup::only(&["tokens.strings", "tokens.literals.string"])),
    syntax("string.escape", Lookup::only(&["palette.peach", "tokens.strings"])),
    italic(
        "string.regex",
        Lookup::only(&["tokens.strings.regex", "tokens.literals.regex"]),
    ),
    syntax("string.special", STRINGS),
    syntax("string.special.symbol", STRINGS),
    syntax(
        "tag",
        Lookup::only(&["palette.tagName", "tokens.meta.tag", "tokens.types"]),
    ),
    syntax("text.literal", STRINGS),
    bold(
        "title",
        Lookup::first(&["palette.markdownHeading", "palette.lime"], "ui.status.success"),
    ),
    syntax("type", TYPE_OR_ORCHID),
    syntax("variable", Lookup::only(&["tokens.variables"])),
    italic(
        "variable.special",
        Lookup::only(&["tokens.variables.global", "tokens.variables"]),
    ),
    syntax("variant", ENUM),
];
