//! Binary Canonical Serialization codec.
//!
//! Integers are little-endian, discriminants and length prefixes are unsigned
//! LEB128 (32-bit range), byte strings and sequences are length-prefixed, and
//! `Option` is a presence byte followed by the value.
//!
//! [`Serializer`] never fails: every construction-time invariant has already been
//! checked by the time a value is written. [`Deserializer`] is a cursor whose readers
//! either advance past exactly the bytes they consumed or return an error.
//!
//! Types opt in through [`BcsEncode`] and [`BcsDecode`].

use crate::config::CodecConfig;
use crate::error::{SuiTxError, SuiTxResult};

/// Append-only output buffer.
#[derive(Debug, Default, Clone)]
pub struct Serializer {
    output: Vec<u8>,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn into_output(self) -> Vec<u8> {
        self.output
    }

    pub fn u8(&mut self, value: u8) {
        self.output.push(value);
    }

    pub fn u16(&mut self, value: u16) {
        self.output.extend_from_slice(&value.to_le_bytes());
    }

    pub fn u32(&mut self, value: u32) {
        self.output.extend_from_slice(&value.to_le_bytes());
    }

    pub fn u64(&mut self, value: u64) {
        self.output.extend_from_slice(&value.to_le_bytes());
    }

    pub fn u128(&mut self, value: u128) {
        self.output.extend_from_slice(&value.to_le_bytes());
    }

    pub fn bool(&mut self, value: bool) {
        self.u8(u8::from(value));
    }

    pub fn uleb128(&mut self, mut value: u32) {
        while value >= 0x80 {
            self.output.push((value & 0x7f) as u8 | 0x80);
            value >>= 7;
        }
        self.output.push(value as u8);
    }

    /// Length-prefixed byte string.
    pub fn bytes(&mut self, value: &[u8]) {
        self.len_prefix(value.len());
        self.output.extend_from_slice(value);
    }

    pub fn str(&mut self, value: &str) {
        self.bytes(value.as_bytes());
    }

    /// Raw bytes with no length prefix.
    pub fn fixed_bytes(&mut self, value: &[u8]) {
        self.output.extend_from_slice(value);
    }

    /// Element count followed by each element written by `write`.
    pub fn sequence<T>(&mut self, items: &[T], mut write: impl FnMut(&mut Self, &T)) {
        self.len_prefix(items.len());
        for item in items {
            write(self, item);
        }
    }

    pub fn option<T>(&mut self, value: Option<&T>, write: impl FnOnce(&mut Self, &T)) {
        self.bool(value.is_some());
        if let Some(value) = value {
            write(self, value);
        }
    }

    /// Delegate to the value's own writer.
    pub fn encode<T: BcsEncode + ?Sized>(&mut self, value: &T) {
        value.encode(self);
    }

    fn len_prefix(&mut self, len: usize) {
        // Lengths beyond u32 cannot be produced by any constructor in this crate.
        debug_assert!(len <= u32::MAX as usize);
        self.uleb128(len as u32);
    }
}

/// Cursor over an input slice.
#[derive(Debug, Clone)]
pub struct Deserializer<'a> {
    input: &'a [u8],
    offset: usize,
    depth: usize,
    config: CodecConfig,
}

impl<'a> Deserializer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, CodecConfig::default())
    }

    pub fn with_config(input: &'a [u8], config: CodecConfig) -> Self {
        Self {
            input,
            offset: 0,
            depth: 0,
            config,
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.input.len() - self.offset
    }

    /// Fail if any input is left unconsumed.
    pub fn finish(self) -> SuiTxResult<()> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(SuiTxError::malformed(format!(
                "{} trailing bytes after decoded value",
                n
            ))),
        }
    }

    fn take(&mut self, len: usize) -> SuiTxResult<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(SuiTxError::TruncatedInput {
                needed: len,
                remaining,
            });
        }
        let slice = &self.input[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self) -> SuiTxResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn u8(&mut self) -> SuiTxResult<u8> {
        Ok(self.array::<1>()?[0])
    }

    pub fn u16(&mut self) -> SuiTxResult<u16> {
        Ok(u16::from_le_bytes(self.array()?))
    }

    pub fn u32(&mut self) -> SuiTxResult<u32> {
        Ok(u32::from_le_bytes(self.array()?))
    }

    pub fn u64(&mut self) -> SuiTxResult<u64> {
        Ok(u64::from_le_bytes(self.array()?))
    }

    pub fn u128(&mut self) -> SuiTxResult<u128> {
        Ok(u128::from_le_bytes(self.array()?))
    }

    pub fn bool(&mut self) -> SuiTxResult<bool> {
        match self.u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(SuiTxError::malformed(format!(
                "invalid bool byte {:#04x}",
                other
            ))),
        }
    }

    pub fn uleb128(&mut self) -> SuiTxResult<u32> {
        let mut value: u64 = 0;
        for shift in (0..32).step_by(7) {
            let byte = self.u8()?;
            let digit = byte & 0x7f;
            value |= u64::from(digit) << shift;
            if byte & 0x80 == 0 {
                if shift > 0 && digit == 0 && self.config.canonical_uleb128 {
                    return Err(SuiTxError::malformed("non-canonical uleb128 encoding"));
                }
                return u32::try_from(value)
                    .map_err(|_| SuiTxError::malformed("uleb128 value overflows u32"));
            }
        }
        Err(SuiTxError::malformed("uleb128 value overflows u32"))
    }

    /// Length-prefixed byte string.
    pub fn bytes(&mut self) -> SuiTxResult<Vec<u8>> {
        let len = self.len_prefix()?;
        Ok(self.take(len)?.to_vec())
    }

    pub fn str(&mut self) -> SuiTxResult<String> {
        let bytes = self.bytes()?;
        String::from_utf8(bytes).map_err(|e| SuiTxError::malformed(format!("invalid utf-8: {}", e)))
    }

    /// Exactly `len` raw bytes, no length prefix.
    pub fn fixed_bytes(&mut self, len: usize) -> SuiTxResult<Vec<u8>> {
        Ok(self.take(len)?.to_vec())
    }

    pub fn sequence<T>(
        &mut self,
        mut read: impl FnMut(&mut Self) -> SuiTxResult<T>,
    ) -> SuiTxResult<Vec<T>> {
        let len = self.len_prefix()?;
        // Every element takes at least one byte, so the input bounds the allocation.
        let mut items = Vec::with_capacity(len.min(self.remaining()));
        for _ in 0..len {
            items.push(read(self)?);
        }
        Ok(items)
    }

    pub fn option<T>(
        &mut self,
        read: impl FnOnce(&mut Self) -> SuiTxResult<T>,
    ) -> SuiTxResult<Option<T>> {
        if self.bool()? {
            Ok(Some(read(self)?))
        } else {
            Ok(None)
        }
    }

    /// Delegate to the type's own reader.
    pub fn decode<T: BcsDecode>(&mut self) -> SuiTxResult<T> {
        T::decode(self)
    }

    /// Run `read` one nesting level deeper, bounded by `max_container_depth`.
    pub fn nested<T>(
        &mut self,
        read: impl FnOnce(&mut Self) -> SuiTxResult<T>,
    ) -> SuiTxResult<T> {
        if self.depth >= self.config.max_container_depth {
            return Err(SuiTxError::malformed(format!(
                "container depth exceeds {}",
                self.config.max_container_depth
            )));
        }
        self.depth += 1;
        let result = read(self);
        self.depth -= 1;
        result
    }

    fn len_prefix(&mut self) -> SuiTxResult<usize> {
        let len = self.uleb128()? as usize;
        if len > self.config.max_sequence_length {
            return Err(SuiTxError::malformed(format!(
                "length {} exceeds limit {}",
                len, self.config.max_sequence_length
            )));
        }
        Ok(len)
    }
}

/// A value with a canonical binary form.
pub trait BcsEncode {
    fn encode(&self, ser: &mut Serializer);

    fn to_bcs_bytes(&self) -> Vec<u8> {
        let mut ser = Serializer::new();
        self.encode(&mut ser);
        ser.into_output()
    }
}

/// A value that can be read back from its canonical binary form.
pub trait BcsDecode: Sized {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self>;

    /// Decode a whole buffer, rejecting trailing bytes.
    fn from_bcs_bytes(bytes: &[u8]) -> SuiTxResult<Self> {
        let mut de = Deserializer::new(bytes);
        let value = Self::decode(&mut de)?;
        de.finish()?;
        Ok(value)
    }
}

macro_rules! impl_bcs_primitive {
    ($($ty:ident),*) => {
        $(
            impl BcsEncode for $ty {
                fn encode(&self, ser: &mut Serializer) {
                    ser.$ty(*self);
                }
            }

            impl BcsDecode for $ty {
                fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
                    de.$ty()
                }
            }
        )*
    };
}

impl_bcs_primitive!(u8, u16, u32, u64, u128, bool);

impl BcsEncode for str {
    fn encode(&self, ser: &mut Serializer) {
        ser.str(self);
    }
}

impl BcsEncode for String {
    fn encode(&self, ser: &mut Serializer) {
        ser.str(self);
    }
}

impl BcsDecode for String {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        de.str()
    }
}

impl<T: BcsEncode> BcsEncode for [T] {
    fn encode(&self, ser: &mut Serializer) {
        ser.sequence(self, |ser, item| item.encode(ser));
    }
}

impl<T: BcsEncode> BcsEncode for Vec<T> {
    fn encode(&self, ser: &mut Serializer) {
        self.as_slice().encode(ser);
    }
}

impl<T: BcsDecode> BcsDecode for Vec<T> {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        de.sequence(T::decode)
    }
}

impl<T: BcsEncode> BcsEncode for Option<T> {
    fn encode(&self, ser: &mut Serializer) {
        ser.option(self.as_ref(), |ser, value| value.encode(ser));
    }
}

impl<T: BcsDecode> BcsDecode for Option<T> {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        de.option(T::decode)
    }
}

impl<T: BcsEncode + ?Sized> BcsEncode for &T {
    fn encode(&self, ser: &mut Serializer) {
        (**self).encode(ser);
    }
}

impl<T: BcsEncode + ?Sized> BcsEncode for Box<T> {
    fn encode(&self, ser: &mut Serializer) {
        (**self).encode(ser);
    }
}

impl<T: BcsDecode> BcsDecode for Box<T> {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        T::decode(de).map(Box::new)
    }
}
