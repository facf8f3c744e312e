// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use base64::{engine::general_purpose::STANDARD, Engine};
use error::Error;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportData {
  pub data: Vec<EncryptedPassportElement>,
  pub credentials: EncryptedCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportFile {
  pub file_id: String,
  pub file_unique_id: String,
  pub file_size: i64,
  pub file_date: i64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedPassportElement {
  /// personal_details, passport, driver_license, identity_card,
  /// internal_passport, address, utility_bill, bank_statement,
  /// rental_agreement, passport_registration, temporary_registration,
  /// phone_number or email.
  #[serde(rename = "type")]
  pub kind: String,
  pub data: Option<String>,
  pub phone_number: Option<String>,
  pub email: Option<String>,
  pub files: Option<Vec<PassportFile>>,
  pub front_side: Option<PassportFile>,
  pub reverse_side: Option<PassportFile>,
  pub selfie: Option<PassportFile>,
  pub translation: Option<Vec<PassportFile>>,
  pub hash: String,
}

/// Credentials encrypted with the bot's public RSA key. All three fields
/// are base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedCredentials {
  pub data: String,
  pub hash: String,
  pub secret: String,
}

impl EncryptedCredentials {
  pub fn data_bytes(&self) -> Result<Vec<u8>, Error> {
    decode(&self.data)
  }

  pub fn hash_bytes(&self) -> Result<Vec<u8>, Error> {
    decode(&self.hash)
  }

  pub fn secret_bytes(&self) -> Result<Vec<u8>, Error> {
    decode(&self.secret)
  }
}

fn decode(value: &str) -> Result<Vec<u8>, Error> {
  STANDARD
    .decode(value)
    .map_err(|e| Error::ParseError(format!("Invalid base64 in passport credentials: {}", e)))
}

/// An issue in Telegram Passport data reported with setPassportDataErrors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PassportElementError {
  Data {
    #[serde(rename = "type")]
    kind: String,
    field_name: String,
    data_hash: String,
    message: String,
  },
  FrontSide {
    #[serde(rename = "type")]
    kind: String,
    file_hash: String,
    message: String,
  },
  ReverseSide {
    #[serde(rename = "type")]
    kind: String,
    file_hash: String,
    message: String,
  },
  Selfie {
    #[serde(rename = "type")]
    kind: String,
    file_hash: String,
    message: String,
  },
  File {
    #[serde(rename = "type")]
    kind: String,
    file_hash: String,
    message: String,
  },
  Files {
    #[serde(rename = "type")]
    kind: String,
    file_hashes: Vec<String>,
    message: String,
  },
  TranslationFile {
    #[serde(rename = "type")]
    kind: String,
    file_hash: String,
    message: String,
  },
  TranslationFiles {
    #[serde(rename = "type")]
    kind: String,
    file_hashes: Vec<String>,
    message: String,
  },
  Unspecified {
    #[serde(rename = "type")]
    kind: String,
    element_hash: String,
    message: String,
  },
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn decodes_credentials() {
    let credentials = EncryptedCredentials {
      data: STANDARD.encode(b"payload"),
      hash: STANDARD.encode(b"hash"),
      secret: "%%%".into(),
    };
    assert_eq!(credentials.data_bytes().unwrap(), b"payload");
    assert_eq!(credentials.hash_bytes().unwrap(), b"hash");
    assert!(matches!(credentials.secret_bytes(), Err(Error::ParseError(_))));
  }

  #[test]
  fn element_error_carries_source_tag() {
    let error = PassportElementError::Files {
      kind: "utility_bill".into(),
      file_hashes: vec!["a".into(), "b".into()],
      message: "Blurry scans".into(),
    };
    assert_eq!(
      serde_json::to_value(&error).unwrap(),
      json!({
        "source": "files",
        "type": "utility_bill",
        "file_hashes": ["a", "b"],
        "message": "Blurry scans"
      })
    );
  }
}
