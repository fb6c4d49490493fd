/// Side effects the runtime performs after the reducer has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ArmTicker,
    DisarmTicker,
}
