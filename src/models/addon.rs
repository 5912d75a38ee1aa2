use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AddOnPricing {
    PerPerson,
    Fixed,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AddOnFrequency {
    Once,
    PerNight,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub pricing: AddOnPricing,
    pub frequency: AddOnFrequency,
    pub description: String,
}

impl AddOn {
    pub fn new(
        id: &str,
        name: &str,
        price: f64,
        pricing: AddOnPricing,
        frequency: AddOnFrequency,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            pricing,
            frequency,
            description: description.to_string(),
        }
    }
}

/// Fixed list of extras a guest can attach to a booking.
#[derive(Debug, Clone, Serialize)]
pub struct AddOnCatalog {
    add_ons: Vec<AddOn>,
}

impl AddOnCatalog {
    pub fn new(add_ons: Vec<AddOn>) -> Self {
        Self { add_ons }
    }

    pub fn all(&self) -> &[AddOn] {
        &self.add_ons
    }

    pub fn find(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|add_on| add_on.id == id)
    }

    /// Resolves selected ids in selection order, failing on the first unknown id.
    pub fn select<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<&AddOn>, String> {
        ids.iter()
            .map(|id| {
                self.find(id.as_ref())
                    .ok_or_else(|| id.as_ref().to_string())
            })
            .collect()
    }
}

impl Default for AddOnCatalog {
    fn default() -> Self {
        Self::new(vec![
            AddOn::new(
                "add-1",
                "Airport Speedboat Transfer",
                35.0,
                AddOnPricing::PerPerson,
                AddOnFrequency::Once,
                "Scheduled speedboat from Male Int Airport",
            ),
            AddOn::new(
                "add-2",
                "Half Board Upgrade",
                25.0,
                AddOnPricing::PerPerson,
                AddOnFrequency::PerNight,
                "Breakfast and Dinner included",
            ),
            AddOn::new(
                "add-3",
                "Sandbank Excursion",
                60.0,
                AddOnPricing::PerPerson,
                AddOnFrequency::Once,
                "Half day trip to a private sandbank",
            ),
            AddOn::new(
                "add-4",
                "Snorkeling Gear Rental",
                10.0,
                AddOnPricing::Fixed,
                AddOnFrequency::PerNight,
                "High quality mask, fins and snorkel",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = AddOnCatalog::default();
        assert_eq!(catalog.all().len(), 4);

        let gear = catalog.find("add-4").unwrap();
        assert_eq!(gear.pricing, AddOnPricing::Fixed);
        assert_eq!(gear.frequency, AddOnFrequency::PerNight);
        assert!(catalog.find("add-99").is_none());
    }

    #[test]
    fn test_select_keeps_order_and_rejects_unknown() {
        let catalog = AddOnCatalog::default();

        let selected = catalog.select(&["add-3", "add-1"]).unwrap();
        let ids: Vec<&str> = selected.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["add-3", "add-1"]);

        assert_eq!(catalog.select(&["add-1", "spa"]), Err("spa".to_string()));
    }

    #[test]
    fn test_add_on_wire_format() {
        let json = serde_json::to_value(AddOnCatalog::default().find("add-2").unwrap()).unwrap();
        assert_eq!(json["type"], "per_person");
        assert_eq!(json["frequency"], "per_night");
    }
}
