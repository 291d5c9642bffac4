use anchor_lang::prelude::ProgramError;
#[cfg(not(test))]
use anchor_lang::prelude::{Clock, SolanaSysvar};

#[derive(Clone, Copy, Debug)]
pub struct OracleClock {
    pub slot: u64,
    pub unix_timestamp: i64,
}

impl OracleClock {
    /// Pins the published slot, leaving the timestamp from the cluster.
    pub fn with_slot(self, slot: Option<u64>) -> Self {
        match slot {
            Some(slot) => OracleClock { slot, ..self },
            None => self,
        }
    }
}

pub fn get_clock() -> Result<OracleClock, ProgramError> {
    #[cfg(test)]
    {
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        Ok(OracleClock {
            slot: time as u64,
            unix_timestamp: time,
        })
    }

    #[cfg(not(test))]
    {
        let clock = Clock::get()?;
        Ok(OracleClock {
            slot: clock.slot,
            unix_timestamp: clock.unix_timestamp,
        })
    }
}
