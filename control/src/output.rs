/// Desired state of the relay outputs.
///
/// This structure transfers the result of a tick to the hardware binding,
/// asking to switch relays on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DesiredOutput<const N: usize> {
    pub relays: [bool; N],
}

impl<const N: usize> Default for DesiredOutput<N> {
    fn default() -> Self {
        Self { relays: [false; N] }
    }
}

impl<const N: usize> DesiredOutput<N> {
    pub fn any_on(&self) -> bool {
        self.relays.iter().any(|r| *r)
    }
}
