// SPDX-License-Identifier: Apache-2.0

use emissia_model::SourceCategory;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

use crate::error::ConfigurationError;
use crate::schema::{
    DocumentMeta, ElectricityFactors, FactorDocument, FuelFactors, WasteFactors, WaterFactors,
};
use crate::validate::{validate_electricity, validate_fuel, validate_waste, validate_water};

/// Read-only factor tables for every source category.
///
/// A category whose document was never supplied holds an empty table, so
/// every lookup against it misses and resolution falls to engine defaults.
/// There is no mutation path once construction returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactorDatabase {
    electricity: ElectricityFactors,
    fuel: FuelFactors,
    water: WaterFactors,
    waste: WasteFactors,
    documents: BTreeMap<SourceCategory, DocumentMeta>,
}

impl FactorDatabase {
    /// No documents: every calculation resolves through engine defaults.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a database from in-memory JSON documents. Each category may
    /// appear at most once.
    pub fn from_json_documents<'a, I>(documents: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (SourceCategory, &'a str)>,
    {
        let mut db = Self::empty();
        for (category, raw) in documents {
            db.insert_document(category, raw)?;
        }
        Ok(db)
    }

    pub(crate) fn insert_document(
        &mut self,
        category: SourceCategory,
        raw: &str,
    ) -> Result<(), ConfigurationError> {
        if self.documents.contains_key(&category) {
            return Err(ConfigurationError::for_category(
                category,
                "document supplied more than once",
            ));
        }
        let meta = match category {
            SourceCategory::Electricity => {
                let (meta, factors) = decode::<ElectricityFactors>(category, raw)?;
                validate_electricity(&factors)?;
                self.electricity = factors;
                meta
            }
            SourceCategory::Fuel => {
                let (meta, factors) = decode::<FuelFactors>(category, raw)?;
                validate_fuel(&factors)?;
                self.fuel = factors;
                meta
            }
            SourceCategory::Water => {
                let (meta, factors) = decode::<WaterFactors>(category, raw)?;
                validate_water(&factors)?;
                self.water = factors;
                meta
            }
            SourceCategory::Waste => {
                let (meta, factors) = decode::<WasteFactors>(category, raw)?;
                validate_waste(&factors)?;
                self.waste = factors;
                meta
            }
        };
        self.documents.insert(category, meta);
        Ok(())
    }

    #[must_use]
    pub fn electricity(&self) -> &ElectricityFactors {
        &self.electricity
    }

    #[must_use]
    pub fn fuel(&self) -> &FuelFactors {
        &self.fuel
    }

    #[must_use]
    pub fn water(&self) -> &WaterFactors {
        &self.water
    }

    #[must_use]
    pub fn waste(&self) -> &WasteFactors {
        &self.waste
    }

    #[must_use]
    pub fn is_loaded(&self, category: SourceCategory) -> bool {
        self.documents.contains_key(&category)
    }

    #[must_use]
    pub fn loaded_categories(&self) -> Vec<SourceCategory> {
        self.documents.keys().copied().collect()
    }

    #[must_use]
    pub fn missing_categories(&self) -> Vec<SourceCategory> {
        SourceCategory::ALL
            .into_iter()
            .filter(|c| !self.is_loaded(*c))
            .collect()
    }

    #[must_use]
    pub fn document_meta(&self, category: SourceCategory) -> Option<&DocumentMeta> {
        self.documents.get(&category)
    }

    /// Number of leaf factor values held for `category`.
    #[must_use]
    pub fn entry_count(&self, category: SourceCategory) -> usize {
        match category {
            SourceCategory::Electricity => {
                let global = usize::from(self.electricity.global_average.is_some());
                let per_country: usize = self
                    .electricity
                    .countries
                    .values()
                    .map(|grid| usize::from(grid.national_grid.is_some()) + grid.regions.len())
                    .sum();
                global + per_country
            }
            SourceCategory::Fuel => self.fuel.len(),
            SourceCategory::Water => self.water.len(),
            SourceCategory::Waste => self.waste.entry_count(),
        }
    }
}

fn decode<F: DeserializeOwned>(
    category: SourceCategory,
    raw: &str,
) -> Result<(DocumentMeta, F), ConfigurationError> {
    let document: FactorDocument<F> = serde_json::from_str(raw).map_err(|e| {
        ConfigurationError::for_category(category, format!("parse {category} document failed: {e}"))
    })?;
    Ok(document.into_parts())
}
