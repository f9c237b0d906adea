/// Pointer-hover flag for one element. Each element owns its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverSwap {
    hovered: bool,
}

impl HoverSwap {
    pub fn entered(self) -> Self {
        Self { hovered: true }
    }

    pub fn left(self) -> Self {
        Self { hovered: false }
    }

    pub fn is_hovered(self) -> bool {
        self.hovered
    }

    pub fn pick<'a, T: ?Sized>(self, primary: &'a T, alternate: &'a T) -> &'a T {
        if self.hovered {
            alternate
        } else {
            primary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_while_hovered_and_reverts_on_leave() {
        let idle = HoverSwap::default();
        assert_eq!(idle.pick("View QA Résumé", "عرض"), "View QA Résumé");

        let hovered = idle.entered();
        assert!(hovered.is_hovered());
        assert_eq!(hovered.pick("View QA Résumé", "عرض"), "عرض");

        assert_eq!(hovered.left().pick("View QA Résumé", "عرض"), "View QA Résumé");
    }

    #[test]
    fn repeated_enter_is_idempotent() {
        let hovered = HoverSwap::default().entered().entered();
        assert!(hovered.is_hovered());
        assert!(!hovered.left().left().is_hovered());
    }
}
