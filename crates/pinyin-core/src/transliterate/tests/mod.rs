
use crate::dict::CharDictionary;

pub(super) const SAMPLE_TABLE: &str =
    ",中zhōng,国guó,人rén,绿lǜ,女nǚ,欧ōu,阳yáng,锋fēng,重zhòng chóng,爱ài,你nǐ,好hǎo,";

pub(super) fn make_test_dict() -> CharDictionary {
    CharDictionary::parse(SAMPLE_TABLE)
}
