//! Soul master (命主) and body master (身主).

use crate::branch::EarthlyBranch;
use crate::star::StarId;

/// 命主, from the branch of the soul palace.
pub const fn soul_master(soul_branch: EarthlyBranch) -> StarId {
    match soul_branch {
        EarthlyBranch::Zi => StarId::Tanlang,
        EarthlyBranch::Chou | EarthlyBranch::Hai => StarId::Jumen,
        EarthlyBranch::Yin | EarthlyBranch::Xu => StarId::Lucun,
        EarthlyBranch::Mao | EarthlyBranch::You => StarId::Wenqu,
        EarthlyBranch::Chen | EarthlyBranch::Shen => StarId::Lianzhen,
        EarthlyBranch::Si | EarthlyBranch::Wei => StarId::Wuqu,
        EarthlyBranch::Wu => StarId::Pojun,
    }
}

/// 身主, from the birth-year branch.
pub const fn body_master(year_branch: EarthlyBranch) -> StarId {
    match year_branch {
        EarthlyBranch::Zi | EarthlyBranch::Wu => StarId::Huoxing,
        EarthlyBranch::Chou | EarthlyBranch::Wei => StarId::Tianxiang,
        EarthlyBranch::Yin | EarthlyBranch::Shen => StarId::Tianliang,
        EarthlyBranch::Mao | EarthlyBranch::You => StarId::Tiantong,
        EarthlyBranch::Si | EarthlyBranch::Hai => StarId::Tianji,
        EarthlyBranch::Chen | EarthlyBranch::Xu => StarId::Wenchang,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masters() {
        assert_eq!(soul_master(EarthlyBranch::Wu), StarId::Pojun);
        assert_eq!(soul_master(EarthlyBranch::Hai), StarId::Jumen);
        assert_eq!(body_master(EarthlyBranch::Chen), StarId::Wenchang);
        assert_eq!(body_master(EarthlyBranch::Zi), StarId::Huoxing);
    }
}
