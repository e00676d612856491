use super::table::{BaseElementRecord, ElementLookup};

/// Read-only access to base element records.
pub trait ElementSource {
    fn element_by_name(&self, name: &str) -> Option<&BaseElementRecord>;

    fn element_by_protons(&self, protons: u32) -> Option<&BaseElementRecord>;

    /// Name first, then atomic number, then a synthesized placeholder.
    fn resolve(&self, name: &str, protons: u32) -> ElementLookup<'_> {
        match self
            .element_by_name(name)
            .or_else(|| self.element_by_protons(protons))
        {
            Some(record) => ElementLookup::Found(record),
            None => ElementLookup::Substituted(BaseElementRecord::placeholder(protons)),
        }
    }
}

impl ElementSource for [BaseElementRecord] {
    fn element_by_name(&self, name: &str) -> Option<&BaseElementRecord> {
        self.iter().find(|record| record.name == name)
    }

    fn element_by_protons(&self, protons: u32) -> Option<&BaseElementRecord> {
        self.iter().find(|record| record.protons == protons)
    }
}

#[cfg(test)]
mod tests {
    use super::ElementSource;
    use crate::modules::table::BaseElementRecord;

    fn carbon() -> BaseElementRecord {
        let mut record = BaseElementRecord::placeholder(6);
        record.name = "Carbon".to_string();
        record.symbol = "C".to_string();
        record.neutrons = 6;
        record
    }

    #[test]
    fn resolve_prefers_name_over_protons() {
        let records = vec![carbon()];
        let lookup = records.as_slice().resolve("Carbon", 99);
        assert!(lookup.is_found());
        assert_eq!(lookup.record().protons, 6);
    }

    #[test]
    fn resolve_falls_back_to_protons_then_placeholder() {
        let records = vec![carbon()];
        let by_protons = records.as_slice().resolve("Unknown", 6);
        assert!(by_protons.is_found());
        assert_eq!(by_protons.record().name, "Carbon");

        let placeholder = records.as_slice().resolve("Unknown", 7);
        assert!(placeholder.is_substituted());
        assert_eq!(placeholder.record().protons, 7);
        assert_eq!(placeholder.record().symbol, "X");
    }
}
