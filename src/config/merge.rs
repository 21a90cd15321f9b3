//! Configuration merging logic
//!
//! Layers are applied left to right. A field set in a later layer replaces
//! the value from earlier layers; an absent field leaves it untouched.

use super::schema::{EditorSettings, FormatOptions};

/// Fixed values used in place of editor settings for formatters older than 2.0.
pub const LEGACY_ARROW_PARENS: &str = "avoid";
pub const LEGACY_TRAILING_COMMA: &str = "none";
pub const LEGACY_END_OF_LINE: &str = "auto";

/// Apply `over` on top of `base`.
pub fn overlay(base: FormatOptions, over: FormatOptions) -> FormatOptions {
    let mut extra = base.extra;
    extra.extend(over.extra);

    FormatOptions {
        arrow_parens: over.arrow_parens.or(base.arrow_parens),
        bracket_spacing: over.bracket_spacing.or(base.bracket_spacing),
        end_of_line: over.end_of_line.or(base.end_of_line),
        html_whitespace_sensitivity: over
            .html_whitespace_sensitivity
            .or(base.html_whitespace_sensitivity),
        insert_pragma: over.insert_pragma.or(base.insert_pragma),
        jsx_bracket_same_line: over.jsx_bracket_same_line.or(base.jsx_bracket_same_line),
        jsx_single_quote: over.jsx_single_quote.or(base.jsx_single_quote),
        print_width: over.print_width.or(base.print_width),
        prose_wrap: over.prose_wrap.or(base.prose_wrap),
        quote_props: over.quote_props.or(base.quote_props),
        require_pragma: over.require_pragma.or(base.require_pragma),
        semi: over.semi.or(base.semi),
        single_quote: over.single_quote.or(base.single_quote),
        tab_width: over.tab_width.or(base.tab_width),
        trailing_comma: over.trailing_comma.or(base.trailing_comma),
        use_tabs: over.use_tabs.or(base.use_tabs),
        vue_indent_script_and_style: over
            .vue_indent_script_and_style
            .or(base.vue_indent_script_and_style),
        filepath: over.filepath.or(base.filepath),
        parser: over.parser.or(base.parser),
        range_start: over.range_start.or(base.range_start),
        range_end: over.range_end.or(base.range_end),
        extra,
    }
}

/// Merge an ordered list of partial records, lowest precedence first.
pub fn merge_layers<I>(layers: I) -> FormatOptions
where
    I: IntoIterator<Item = FormatOptions>,
{
    layers.into_iter().fold(FormatOptions::default(), overlay)
}

/// Build the options layer derived from editor settings.
///
/// With `newer_defaults` false (formatter < 2.0) the arrow-parens,
/// trailing-comma and end-of-line fields take the legacy fixed values
/// whatever the editor says.
pub fn editor_options(editor: &EditorSettings, newer_defaults: bool) -> FormatOptions {
    let (arrow_parens, trailing_comma, end_of_line) = if newer_defaults {
        (
            editor.arrow_parens.clone(),
            editor.trailing_comma.clone(),
            editor.end_of_line.clone(),
        )
    } else {
        (
            Some(LEGACY_ARROW_PARENS.to_string()),
            Some(LEGACY_TRAILING_COMMA.to_string()),
            Some(LEGACY_END_OF_LINE.to_string()),
        )
    };

    FormatOptions {
        arrow_parens,
        bracket_spacing: editor.bracket_spacing,
        end_of_line,
        html_whitespace_sensitivity: editor.html_whitespace_sensitivity.clone(),
        insert_pragma: editor.insert_pragma,
        jsx_bracket_same_line: editor.jsx_bracket_same_line,
        jsx_single_quote: editor.jsx_single_quote,
        print_width: editor.print_width,
        prose_wrap: editor.prose_wrap.clone(),
        quote_props: editor.quote_props.clone(),
        require_pragma: editor.require_pragma,
        semi: editor.semi,
        single_quote: editor.single_quote,
        tab_width: editor.tab_width,
        trailing_comma,
        use_tabs: editor.use_tabs,
        vue_indent_script_and_style: editor.vue_indent_script_and_style,
        ..Default::default()
    }
}

/// CLI options that can override the editor settings file.
///
/// Uses `Option<T>` to distinguish "not specified" from "explicitly set".
#[derive(Debug, Default)]
pub struct CliEditorOptions {
    pub tab_width: Option<usize>,
    pub print_width: Option<usize>,
    pub use_tabs: Option<bool>,
    pub single_quote: Option<bool>,
    pub semi: Option<bool>,
}

/// Merge editor settings from CLI flags and a settings file.
///
/// Priority: CLI > file > absent
pub fn merge_editor_settings(
    cli: &CliEditorOptions,
    file: Option<&EditorSettings>,
) -> EditorSettings {
    let mut settings = file.cloned().unwrap_or_default();

    settings.tab_width = cli.tab_width.or(settings.tab_width);
    settings.print_width = cli.print_width.or(settings.print_width);
    settings.use_tabs = cli.use_tabs.or(settings.use_tabs);
    settings.single_quote = cli.single_quote.or(settings.single_quote);
    settings.semi = cli.semi.or(settings.semi);

    settings
}
