use mock_oracles::instruction::{SetPythPrice, SetSwitchboardPrice};

/// Arguments of `set_pyth_price`. Omitted fields reset to zero on chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PythPriceParams {
    pub price: i64,
    pub conf: u64,
    pub expo: i32,
    pub ema_price: i64,
    pub ema_conf: u64,
    /// Published slot; the cluster slot when unset
    pub slot: Option<u64>,
}

/// Arguments of `set_switchboard_price`. `expo` becomes the decimal scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwitchboardPriceParams {
    pub price: i64,
    pub expo: i32,
    /// Round open slot; the cluster slot when unset
    pub slot: Option<u64>,
}

impl Default for SwitchboardPriceParams {
    fn default() -> Self {
        SwitchboardPriceParams {
            price: -1,
            expo: 0,
            slot: None,
        }
    }
}

impl From<PythPriceParams> for SetPythPrice {
    fn from(params: PythPriceParams) -> Self {
        SetPythPrice {
            price: params.price,
            conf: params.conf,
            expo: params.expo,
            ema_price: params.ema_price,
            ema_conf: params.ema_conf,
            slot: params.slot,
        }
    }
}

impl From<SwitchboardPriceParams> for SetSwitchboardPrice {
    fn from(params: SwitchboardPriceParams) -> Self {
        SetSwitchboardPrice {
            price: params.price,
            expo: params.expo,
            slot: params.slot,
        }
    }
}
