/// Location selector for a weather request.
///
/// Fields may be freely combined; nothing enforces exclusivity. When more
/// than one location is set, the most specific one wins: numeric city id,
/// then postal code, then city name, then coordinates. The default query
/// resolves to the `0,0` coordinate pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub city: Option<String>,
    pub country: Option<String>,
    pub lang: Option<String>,
    pub id: Option<u64>,
    pub zip: Option<u64>,
    pub lat: Option<i64>,
    pub lon: Option<i64>,
}

impl Query {
    /// Search by city name, e.g. `Query::by_city("Berlin")`.
    pub fn by_city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Self::default()
        }
    }

    /// Search by numeric city id.
    pub fn by_id(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Search by postal code.
    pub fn by_zip(zip: u64) -> Self {
        Self {
            zip: Some(zip),
            ..Self::default()
        }
    }

    /// Search by geographic coordinates.
    pub fn by_coords(lat: i64, lon: i64) -> Self {
        Self {
            lat: Some(lat),
            lon: Some(lon),
            ..Self::default()
        }
    }

    /// Narrow a city or postal-code search to a country, e.g. `"de"`.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Request condition descriptions in the given language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Render the query fragment, without the leading `?` and without the
    /// API key.
    ///
    /// Values are interpolated as-is; callers supply strings that are safe
    /// for direct query-string embedding.
    pub fn params(&self) -> String {
        let mut params = if let Some(id) = self.id.filter(|&id| id != 0) {
            format!("id={id}")
        } else if let Some(zip) = self.zip.filter(|&zip| zip != 0) {
            match nonempty(&self.country) {
                Some(country) => format!("zip={zip},{country}"),
                None => format!("zip={zip}"),
            }
        } else if let Some(city) = nonempty(&self.city) {
            match nonempty(&self.country) {
                Some(country) => format!("q={city},{country}"),
                None => format!("q={city}"),
            }
        } else {
            format!("lat={}&lon={}", self.lat.unwrap_or(0), self.lon.unwrap_or(0))
        };

        if let Some(lang) = nonempty(&self.lang) {
            params.push_str("&lang=");
            params.push_str(lang);
        }
        params
    }
}

fn nonempty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
