use serde::{Deserialize, Deserializer, Serialize};

/// Where a connection draws its input from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    Neuron,
    Sensor,
}

/// Where a connection delivers its output to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SinkType {
    Neuron,
    Action,
}

/// Fixed-point scale of `Gene::weight`
pub const WEIGHT_SCALE: f64 = 8192.0;

/// Width of a packed gene word
pub const BITS_PER_GENE_WORD: u32 = u32::BITS;

const SOURCE_TYPE_BIT: u32 = 1;
const SOURCE_NUM_SHIFT: u32 = 1;
const SINK_TYPE_BIT: u32 = 1 << 8;
const SINK_NUM_SHIFT: u32 = 9;
const NUM_MASK: u32 = 0x7f;
const WEIGHT_SHIFT: u32 = 16;

/// Largest source or sink number the packed word can hold
pub const MAX_CONNECTION_NUM: u16 = NUM_MASK as u16;

/// One wiring connection: source -> sink with a signed fixed-point weight.
///
/// Every gene has a 32-bit packed form used by the bit and word metrics:
///
/// | bits  | field                         |
/// |-------|-------------------------------|
/// | 0     | source type (1 = sensor)      |
/// | 1-7   | source number                 |
/// | 8     | sink type (1 = action)        |
/// | 9-15  | sink number                   |
/// | 16-31 | weight (two's complement i16) |
///
/// Deserialization rejects source and sink numbers above
/// [`MAX_CONNECTION_NUM`]. Genes built in code are not range checked; wider
/// numbers are truncated in the packed word but still compared in full by
/// [`genes_match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gene {
    pub source_type: SourceType,
    #[serde(deserialize_with = "deserialize_connection_num")]
    pub source_num: u16,
    pub sink_type: SinkType,
    #[serde(deserialize_with = "deserialize_connection_num")]
    pub sink_num: u16,
    pub weight: i16,
}

fn deserialize_connection_num<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let num = u16::deserialize(deserializer)?;
    if num > MAX_CONNECTION_NUM {
        return Err(serde::de::Error::custom(format!(
            "connection number {} exceeds {}",
            num, MAX_CONNECTION_NUM
        )));
    }
    Ok(num)
}

impl Gene {
    pub fn new(
        source_type: SourceType,
        source_num: u16,
        sink_type: SinkType,
        sink_num: u16,
        weight: i16,
    ) -> Self {
        Self {
            source_type,
            source_num,
            sink_type,
            sink_num,
            weight,
        }
    }

    pub fn weight_as_float(&self) -> f64 {
        f64::from(self.weight) / WEIGHT_SCALE
    }

    /// Packed 32-bit representation
    pub fn to_word(&self) -> u32 {
        let mut word = 0u32;
        if self.source_type == SourceType::Sensor {
            word |= SOURCE_TYPE_BIT;
        }
        word |= (u32::from(self.source_num) & NUM_MASK) << SOURCE_NUM_SHIFT;
        if self.sink_type == SinkType::Action {
            word |= SINK_TYPE_BIT;
        }
        word |= (u32::from(self.sink_num) & NUM_MASK) << SINK_NUM_SHIFT;
        word | (u32::from(self.weight as u16) << WEIGHT_SHIFT)
    }

    /// Inverse of [`Gene::to_word`]. Every 32-bit value decodes to a gene.
    pub fn from_word(word: u32) -> Self {
        let source_type = if word & SOURCE_TYPE_BIT != 0 {
            SourceType::Sensor
        } else {
            SourceType::Neuron
        };
        let sink_type = if word & SINK_TYPE_BIT != 0 {
            SinkType::Action
        } else {
            SinkType::Neuron
        };

        Self {
            source_type,
            source_num: ((word >> SOURCE_NUM_SHIFT) & NUM_MASK) as u16,
            sink_type,
            sink_num: ((word >> SINK_NUM_SHIFT) & NUM_MASK) as u16,
            weight: (word >> WEIGHT_SHIFT) as u16 as i16,
        }
    }
}

/// Exact match on every field, no tolerance on the weight
pub fn genes_match(g1: &Gene, g2: &Gene) -> bool {
    g1.sink_num == g2.sink_num
        && g1.source_num == g2.source_num
        && g1.sink_type == g2.sink_type
        && g1.source_type == g2.source_type
        && g1.weight == g2.weight
}
