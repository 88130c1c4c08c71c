use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

pub const AGE_FIELD: &str = "age";
pub const SYSTOLIC_FIELD: &str = "ap_hi";
pub const DIASTOLIC_FIELD: &str = "ap_lo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// Raw form values in field order, exactly as the user typed or selected them.
///
/// Serializes as a flat JSON object of field name to string value, which is
/// the body shape the prediction endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    fields: Vec<FormField>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, keeping the field's original position if it
    /// already exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(FormField { name, value }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    pub fn value_mut(&mut self, name: &str) -> Option<&mut String> {
        self.fields
            .iter_mut()
            .find(|field| field.name == name)
            .map(|field| &mut field.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Blanks every value while keeping the set of fields intact.
    pub fn clear_values(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FormInput
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut input = FormInput::new();
        for (name, value) in iter {
            input.set(name, value);
        }
        input
    }
}

impl Serialize for FormInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.name, &field.value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    Low,
    High,
}

impl RiskLabel {
    /// The server flags high risk with label `1`; anything else, including a
    /// missing label, reads as low risk.
    pub fn from_wire(label: Option<&serde_json::Value>) -> Self {
        match label.and_then(serde_json::Value::as_f64) {
            Some(value) if value == 1.0 => RiskLabel::High,
            _ => RiskLabel::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Number { placeholder: String },
    Select { options: Vec<SelectOption> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    fn number(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Number {
                placeholder: placeholder.to_string(),
            },
        }
    }

    fn select(name: &str, label: &str, options: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Select {
                options: options
                    .iter()
                    .map(|(value, label)| SelectOption::new(value, label))
                    .collect(),
            },
        }
    }
}

/// Fields a form surface presents, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Layout of the cardiovascular disease dataset the prediction model was
    /// trained on.
    pub fn cardio() -> Self {
        const LEVELS: &[(&str, &str)] = &[
            ("1", "Normal"),
            ("2", "Above normal"),
            ("3", "Well above normal"),
        ];
        const YES_NO: &[(&str, &str)] = &[("0", "No"), ("1", "Yes")];

        Self {
            fields: vec![
                FieldSpec::number(AGE_FIELD, "Age (years)", "e.g. 52"),
                FieldSpec::select("gender", "Gender", &[("1", "Female"), ("2", "Male")]),
                FieldSpec::number("height", "Height (cm)", "e.g. 168"),
                FieldSpec::number("weight", "Weight (kg)", "e.g. 72"),
                FieldSpec::number(SYSTOLIC_FIELD, "Systolic blood pressure", "e.g. 120"),
                FieldSpec::number(DIASTOLIC_FIELD, "Diastolic blood pressure", "e.g. 80"),
                FieldSpec::select("cholesterol", "Cholesterol", LEVELS),
                FieldSpec::select("gluc", "Glucose", LEVELS),
                FieldSpec::select("smoke", "Smoker", YES_NO),
                FieldSpec::select("alco", "Alcohol intake", YES_NO),
                FieldSpec::select("active", "Physically active", YES_NO),
            ],
        }
    }

    /// A form with every schema field present and blank.
    pub fn empty_input(&self) -> FormInput {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), String::new()))
            .collect()
    }
}
