//! Physical line classification.

/// What a single physical capture line is, before any state is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// `<identifier> = <tag>: <value>`
    Typed {
        identifier: &'a str,
        tag: &'a str,
        value: &'a str,
    },
    /// `<identifier> = <value>`
    Untyped { identifier: &'a str, value: &'a str },
    /// Anything else: belongs to the record currently open.
    Continuation(&'a str),
}

/// Classify a line whose trailing whitespace has already been removed.
///
/// The identifier is everything up to the first space and must be followed by
/// ` = `. A tag is the text before the first `:` of the remainder; it must be
/// non-empty and contain no `"`, so quoted values holding colons stay untyped.
pub(crate) fn classify(line: &str) -> Line<'_> {
    let Some(space) = line.find(' ') else {
        return Line::Continuation(line);
    };
    if space == 0 {
        return Line::Continuation(line);
    }

    let identifier = &line[..space];
    let Some(rest) = line[space..].strip_prefix(" = ") else {
        return Line::Continuation(line);
    };

    if let Some((tag, value)) = rest.split_once(':')
        && !tag.is_empty()
        && !tag.contains('"')
    {
        return Line::Typed {
            identifier,
            tag,
            value: value.trim_start(),
        };
    }

    Line::Untyped {
        identifier,
        value: rest,
    }
}
