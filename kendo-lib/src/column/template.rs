//! Column cell templates with typed slots.

/// Template of the plain field column.
pub const FIELD_TEMPLATE: &str = "#: %field% #";

/// Template of the input column.
pub const INPUT_TEMPLATE: &str =
    r##"<input type="%type%" data-row-uid="#: uid #" name="%field%Input" value="#: %field% #"%options% />"##;

/// A substitution point in a [`ColumnTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// `%field%`: the field name.
    Field,
    /// `%type%`: the input type.
    Type,
    /// `%options%`: extra attributes, each prefixed by a space.
    Options,
}

impl Slot {
    const ALL: [Slot; 3] = [Slot::Field, Slot::Type, Slot::Options];

    /// Returns the marker text of the slot.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Field => "%field%",
            Self::Type => "%type%",
            Self::Options => "%options%",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// Values for every slot. Rendering requires all of them, so no slot marker
/// can survive into the output.
#[derive(Debug, Clone, Copy)]
pub struct SlotValues<'a> {
    pub field: &'a str,
    pub input_type: &'a str,
    pub options: &'a str,
}

impl SlotValues<'_> {
    fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Field => self.field,
            Slot::Type => self.input_type,
            Slot::Options => self.options,
        }
    }
}

/// A cell template split into literal text and [`Slot`]s.
///
/// Only the three slot markers are recognized; any other `%...%` text is
/// literal. Substituted values are never scanned again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTemplate {
    segments: Vec<Segment>,
}

impl ColumnTemplate {
    /// Parses a template.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some((index, slot)) = Slot::ALL
            .iter()
            .filter_map(|slot| rest.find(slot.token()).map(|index| (index, *slot)))
            .min_by_key(|(index, _)| *index)
        {
            if index > 0 {
                segments.push(Segment::Literal(rest[..index].to_string()));
            }
            segments.push(Segment::Slot(slot));
            rest = &rest[index + slot.token().len()..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Self { segments }
    }

    /// Returns `true` if the template contains the slot.
    pub fn has_slot(&self, slot: Slot) -> bool {
        self.segments.contains(&Segment::Slot(slot))
    }

    /// Substitutes every slot in one pass.
    pub fn render(&self, values: &SlotValues<'_>) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Slot(slot) => values.get(*slot),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: SlotValues<'static> = SlotValues {
        field: "price",
        input_type: "number",
        options: r#" step="0.1""#,
    };

    #[test]
    fn test_input_template() {
        let template = ColumnTemplate::parse(INPUT_TEMPLATE);
        assert!(template.has_slot(Slot::Field));
        assert!(template.has_slot(Slot::Type));
        assert!(template.has_slot(Slot::Options));
        assert_eq!(
            template.render(&VALUES),
            r##"<input type="number" data-row-uid="#: uid #" name="priceInput" value="#: price #" step="0.1" />"##
        );
    }

    #[test]
    fn test_field_template() {
        let template = ColumnTemplate::parse(FIELD_TEMPLATE);
        assert!(!template.has_slot(Slot::Type));
        assert_eq!(template.render(&VALUES), "#: price #");
    }

    #[test]
    fn test_unknown_markers_are_literal() {
        let template = ColumnTemplate::parse("<div style=\"width: 100%\">%name% %field%</div>");
        assert_eq!(
            template.render(&VALUES),
            "<div style=\"width: 100%\">%name% price</div>"
        );
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let template = ColumnTemplate::parse("%field%|%type%");
        let values = SlotValues {
            field: "%type%",
            input_type: "text",
            options: "",
        };
        assert_eq!(template.render(&values), "%type%|text");
    }
}
