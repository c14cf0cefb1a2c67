//! XML list parsers.
//!
//! Service words:
//! ```xml
//! <service_words><word>ведь</word><word>вообще</word></service_words>
//! ```
//!
//! Senses, either attribute or child-element form:
//! ```xml
//! <senses>
//!   <sense name="стиральная машина" lemma="стиральная_машина"/>
//!   <sense><name>железная дорога</name><lemma>железная_дорога</lemma></sense>
//! </senses>
//! ```
//! Text may be plain or CDATA. Values are trimmed and lowercased. Blank
//! `<word>` entries are skipped.

use quick_xml::events::{BytesCData, BytesStart, Event};
use quick_xml::Reader;

use qabase_core::errors::ImportError;

/// Which text-bearing element we are inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    None,
    Word,
    Name,
    Lemma,
}

#[derive(Debug, Default)]
struct PendingSense {
    name: Option<String>,
    lemma: Option<String>,
}

impl PendingSense {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = Some(value),
            Field::Lemma => self.lemma = Some(value),
            Field::None | Field::Word => {}
        }
    }

    fn finish(self) -> Result<(String, String), ImportError> {
        let missing = |field: &str| ImportError::MissingField {
            element: "sense".to_string(),
            field: field.to_string(),
        };
        let name = self.name.filter(|n| !n.is_empty()).ok_or_else(|| missing("name"))?;
        let lemma = self.lemma.filter(|l| !l.is_empty()).ok_or_else(|| missing("lemma"))?;
        Ok((name, lemma))
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn malformed(reader: &Reader<&[u8]>, reason: impl ToString) -> ImportError {
    ImportError::MalformedXml {
        position: reader.error_position(),
        reason: reason.to_string(),
    }
}

fn cdata(reader: &Reader<&[u8]>, data: BytesCData<'_>) -> Result<String, ImportError> {
    let bytes = data.into_inner();
    std::str::from_utf8(&bytes)
        .map(normalize)
        .map_err(|e| malformed(reader, e))
}

fn attribute(
    reader: &Reader<&[u8]>,
    element: &BytesStart<'_>,
    key: &str,
) -> Result<Option<String>, ImportError> {
    match element
        .try_get_attribute(key)
        .map_err(|e| malformed(reader, e))?
    {
        Some(attr) => {
            let value = attr.unescape_value().map_err(|e| malformed(reader, e))?;
            Ok(Some(normalize(&value)))
        }
        None => Ok(None),
    }
}

/// Parse every `<word>` element's text.
pub fn parse_service_words(xml: &str) -> Result<Vec<String>, ImportError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut words = Vec::new();
    let mut field = Field::None;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"word" => field = Field::Word,
            Ok(Event::End(e)) if e.name().as_ref() == b"word" => field = Field::None,
            Ok(Event::Text(text)) if field == Field::Word => {
                let word = normalize(&text.unescape().map_err(|e| malformed(&reader, e))?);
                if !word.is_empty() {
                    words.push(word);
                }
            }
            Ok(Event::CData(data)) if field == Field::Word => {
                let word = cdata(&reader, data)?;
                if !word.is_empty() {
                    words.push(word);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(malformed(&reader, e)),
            _ => {}
        }
    }
    Ok(words)
}

/// Parse every `<sense>` element into a `(name, lemma)` pair.
pub fn parse_senses(xml: &str) -> Result<Vec<(String, String)>, ImportError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut senses = Vec::new();
    let mut pending: Option<PendingSense> = None;
    let mut field = Field::None;
    loop {
        match reader.read_event() {
            Ok(Event::Empty(e)) if e.name().as_ref() == b"sense" => {
                let sense = PendingSense {
                    name: attribute(&reader, &e, "name")?,
                    lemma: attribute(&reader, &e, "lemma")?,
                };
                senses.push(sense.finish()?);
            }
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"sense" => {
                    pending = Some(PendingSense {
                        name: attribute(&reader, &e, "name")?,
                        lemma: attribute(&reader, &e, "lemma")?,
                    });
                }
                b"name" if pending.is_some() => field = Field::Name,
                b"lemma" if pending.is_some() => field = Field::Lemma,
                _ => {}
            },
            Ok(Event::Text(text)) => {
                if let Some(sense) = pending.as_mut() {
                    let value = normalize(&text.unescape().map_err(|e| malformed(&reader, e))?);
                    sense.set(field, value);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(sense) = pending.as_mut() {
                    sense.set(field, cdata(&reader, data)?);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"sense" => {
                    if let Some(sense) = pending.take() {
                        senses.push(sense.finish()?);
                    }
                }
                b"name" | b"lemma" => field = Field::None,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(malformed(&reader, e)),
            _ => {}
        }
    }
    Ok(senses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_words_are_trimmed_and_lowercased() {
        let xml = "<service_words><word> Ведь </word><word>ВООБЩЕ</word><word>  </word></service_words>";
        assert_eq!(parse_service_words(xml).unwrap(), vec!["ведь", "вообще"]);
    }

    #[test]
    fn senses_accept_attribute_and_child_forms() {
        let xml = r#"
            <senses>
              <sense name="Стиральная машина" lemma="стиральная_машина"/>
              <sense><name>железная дорога</name><lemma>железная_дорога</lemma></sense>
            </senses>"#;
        let senses = parse_senses(xml).unwrap();
        assert_eq!(
            senses,
            vec![
                ("стиральная машина".to_string(), "стиральная_машина".to_string()),
                ("железная дорога".to_string(), "железная_дорога".to_string()),
            ]
        );
    }

    #[test]
    fn cdata_words_are_kept() {
        let xml = "<service_words><word><![CDATA[ Ведь ]]></word><word>вообще</word></service_words>";
        assert_eq!(parse_service_words(xml).unwrap(), vec!["ведь", "вообще"]);
    }

    #[test]
    fn cdata_outside_word_is_ignored() {
        let xml = "<service_words><![CDATA[шум]]><word>ведь</word></service_words>";
        assert_eq!(parse_service_words(xml).unwrap(), vec!["ведь"]);
    }

    #[test]
    fn cdata_sense_fields_are_read_verbatim() {
        let xml = "<senses><sense><name><![CDATA[A & B]]></name><lemma>c</lemma></sense></senses>";
        assert_eq!(
            parse_senses(xml).unwrap(),
            vec![("a & b".to_string(), "c".to_string())]
        );
    }

    #[test]
    fn sense_without_lemma_is_rejected() {
        let err = parse_senses(r#"<senses><sense name="поезд"/></senses>"#).unwrap_err();
        assert!(matches!(err, ImportError::MissingField { ref field, .. } if field == "lemma"));
    }

    #[test]
    fn mismatched_tags_are_malformed() {
        let err = parse_service_words("<service_words><word>ведь</wrd></service_words>").unwrap_err();
        assert!(matches!(err, ImportError::MalformedXml { .. }));
    }
}
