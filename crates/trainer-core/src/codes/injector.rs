use tracing::info;

use crate::codes::Code;
use crate::error::{Error, Result};
use crate::memory::RemoteMemory;
use crate::memory::layout::code_handler;
use crate::offset::CodeHandler;

/// Writes cheat codes into the reserved handler buffer.
///
/// The write sequence is load-bearing: disable execution, zero the whole
/// buffer, upload the payload, re-enable. The console never sees a
/// half-written buffer that way. An oversized payload is rejected before
/// the first write.
pub struct CodeInjector {
    handler: CodeHandler,
}

impl CodeInjector {
    pub fn new(handler: CodeHandler) -> Self {
        Self { handler }
    }

    /// Concatenate every enabled code, in list order, into the handler
    /// payload. Fails without touching the console if any block contains a
    /// bad token or the total exceeds the buffer capacity.
    pub fn build_payload(&self, codes: &[Code]) -> Result<Vec<u8>> {
        let mut payload = Vec::new();
        for code in codes.iter().filter(|c| c.enabled) {
            for word in code.words()? {
                payload.extend_from_slice(&word.to_be_bytes());
            }
        }
        if payload.len() > code_handler::CAPACITY {
            return Err(Error::Validation(format!(
                "enabled codes need {} bytes, handler buffer holds {}",
                payload.len(),
                code_handler::CAPACITY
            )));
        }
        Ok(payload)
    }

    /// Apply the code list to the console. Returns the number of enabled
    /// codes written.
    pub fn apply<M: RemoteMemory>(&self, memory: &mut M, codes: &[Code]) -> Result<usize> {
        let payload = self.build_payload(codes)?;
        let enabled = codes.iter().filter(|c| c.enabled).count();

        memory.write_u32(self.handler.enabled, 0)?;
        memory.write_bytes(self.handler.start, &vec![0u8; code_handler::CAPACITY])?;
        if !payload.is_empty() {
            memory.write_bytes(self.handler.start, &payload)?;
        }
        memory.write_u32(self.handler.enabled, 1)?;

        info!(
            "Injected {enabled} codes ({} bytes) into the code handler",
            payload.len()
        );
        Ok(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MockMemory;

    fn handler() -> CodeHandler {
        CodeHandler {
            start: 0x010014D0,
            enabled: 0x010014CC,
        }
    }

    fn code(name: &str, block: &str, enabled: bool) -> Code {
        Code {
            name: name.into(),
            block: block.into(),
            enabled,
        }
    }

    #[test]
    fn test_apply_order_disable_clear_write_enable() {
        let injector = CodeInjector::new(handler());
        let mut memory = MockMemory::new();
        let codes = vec![
            code("inf stamina", "076A5DE8 453B8000", true),
            code("disabled", "00000000 00000000", false),
            code("moon jump", "0747B3BC 44160000", true),
        ];
        assert_eq!(injector.apply(&mut memory, &codes).unwrap(), 2);

        let writes = memory.writes();
        assert_eq!(writes.len(), 4);
        // disable
        assert_eq!(writes[0].address, handler().enabled);
        assert_eq!(writes[0].data, 0u32.to_be_bytes().to_vec());
        // full clear
        assert_eq!(writes[1].address, handler().start);
        assert_eq!(writes[1].data, vec![0u8; code_handler::CAPACITY]);
        // enabled codes only, list order, big-endian words
        let mut expected = Vec::new();
        for word in [0x076A_5DE8u32, 0x453B_8000, 0x0747_B3BC, 0x4416_0000] {
            expected.extend_from_slice(&word.to_be_bytes());
        }
        assert_eq!(writes[2].address, handler().start);
        assert_eq!(writes[2].data, expected);
        // re-enable
        assert_eq!(writes[3].address, handler().enabled);
        assert_eq!(writes[3].data, 1u32.to_be_bytes().to_vec());
    }

    #[test]
    fn test_oversized_payload_rejected_before_any_write() {
        let injector = CodeInjector::new(handler());
        let mut memory = MockMemory::new();
        // One word over capacity.
        let words = code_handler::CAPACITY / 4 + 1;
        let block = vec!["11111111"; words].join("\n");
        let codes = vec![code("huge", &block, true)];

        assert!(injector.apply(&mut memory, &codes).is_err());
        assert!(memory.writes().is_empty());
    }

    #[test]
    fn test_bad_token_rejected_before_any_write() {
        let injector = CodeInjector::new(handler());
        let mut memory = MockMemory::new();
        let codes = vec![code("bad", "076A5DE8 nope", true)];
        assert!(injector.apply(&mut memory, &codes).is_err());
        assert!(memory.writes().is_empty());
    }

    #[test]
    fn test_all_disabled_still_clears_and_reenables() {
        let injector = CodeInjector::new(handler());
        let mut memory = MockMemory::new();
        let codes = vec![code("off", "11111111", false)];
        assert_eq!(injector.apply(&mut memory, &codes).unwrap(), 0);
        // disable, clear, enable; no payload write
        assert_eq!(memory.writes().len(), 3);
    }
}
