use super::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsTitle(String);

impl NewsTitle {
  pub const MAX_LENGTH: usize = 255;

  pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
    let title = title.into().trim().to_string();

    if title.is_empty() {
      return Err(ValidationError::TitleRequired);
    }

    if title.chars().count() > Self::MAX_LENGTH {
      return Err(ValidationError::TitleTooLong {
        max: Self::MAX_LENGTH,
      });
    }

    Ok(Self(title))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDescription(String);

impl NewsDescription {
  pub fn new(description: impl Into<String>) -> Result<Self, ValidationError> {
    let description = description.into();

    if description.trim().is_empty() {
      return Err(ValidationError::DescriptionRequired);
    }

    Ok(Self(description))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}
