//! Mock runtime for testing pallet-fortune-ai

use crate as pallet_fortune_ai;
use frame_support::{derive_impl, traits::ConstU32};
use pallet_fortune_common::{FortuneProvider, FortuneSeed, Gender};
use sp_runtime::BuildStorage;
use sp_std::vec::Vec;

type Block = frame_system::mocking::MockBlock<Test>;

// 配置测试运行时
frame_support::construct_runtime!(
    pub enum Test
    {
        System: frame_system,
        FortuneAi: pallet_fortune_ai,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
}

/// Mock FortuneProvider for testing
pub struct MockFortuneProvider;

// 用于测试的模拟命盘数据
thread_local! {
    static MOCK_READINGS: std::cell::RefCell<std::collections::HashMap<u64, (u64, FortuneSeed)>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

impl MockFortuneProvider {
    /// 添加模拟命盘
    pub fn add_reading(reading_id: u64, owner: u64, seed: FortuneSeed) {
        MOCK_READINGS.with(|r| {
            r.borrow_mut().insert(reading_id, (owner, seed));
        });
    }

    /// 清除所有模拟数据
    pub fn clear() {
        MOCK_READINGS.with(|r| r.borrow_mut().clear());
    }
}

impl FortuneProvider<u64> for MockFortuneProvider {
    fn reading_exists(reading_id: u64) -> bool {
        MOCK_READINGS.with(|r| r.borrow().contains_key(&reading_id))
    }

    fn reading_owner(reading_id: u64) -> Option<u64> {
        MOCK_READINGS.with(|r| r.borrow().get(&reading_id).map(|(owner, _)| *owner))
    }

    fn fortune_seed(reading_id: u64) -> Option<FortuneSeed> {
        MOCK_READINGS.with(|r| r.borrow().get(&reading_id).map(|(_, seed)| seed.clone()))
    }
}

impl pallet_fortune_ai::Config for Test {
    type WeightInfo = ();
    type FortuneProvider = MockFortuneProvider;
    type OracleOrigin = frame_system::EnsureRoot<u64>;
    type MaxPromptLen = ConstU32<8192>;
    type MaxResponseLen = ConstU32<8192>;
    type MaxFieldLen = ConstU32<512>;
}

/// 测试用运势种子（账户 1 的命盘 0）
pub fn sample_seed() -> FortuneSeed {
    FortuneSeed {
        name: "홍길동".as_bytes().to_vec(),
        birth_date: b"1990.05.15".to_vec(),
        gender: Gender::Male,
        skill_level: 15,
        venue: "남서울CC".as_bytes().to_vec(),
        element: "金".as_bytes().to_vec(),
        element_name: "금(金) - 쇠의 기운".as_bytes().to_vec(),
        saju_summary: "庚午년 辛巳월 庚辰일 壬午시".as_bytes().to_vec(),
        personality: "정확하고 완벽주의 (중급자, 남성적)".as_bytes().to_vec(),
        golf_style: "정확하고 완벽주의".as_bytes().to_vec(),
        strengths: vec!["아이언".as_bytes().to_vec(), "샌드웨지".as_bytes().to_vec()],
        weaknesses: vec!["드라이버".as_bytes().to_vec(), "유연성".as_bytes().to_vec()],
        lucky_colors: vec!["흰색".as_bytes().to_vec(), "금색".as_bytes().to_vec()],
        lucky_numbers: vec![4, 9],
        recommendations: vec![
            "충분한 워밍업을 하세요".as_bytes().to_vec(),
            "긍정적인 마음가짐을 유지하세요".as_bytes().to_vec(),
            "집중력을 높이세요".as_bytes().to_vec(),
            "정확성을 중시하는 연습을 하세요".as_bytes().to_vec(),
            "완벽을 추구하되 스트레스는 피하세요".as_bytes().to_vec(),
            "특정 클럽의 정확도를 높이세요".as_bytes().to_vec(),
            "멘탈 게임을 연습하세요".as_bytes().to_vec(),
        ],
    }
}

/// 合法的生成器 JSON 回复
pub fn sample_reply() -> Vec<u8> {
    r#"{
        "title": "금의 기운이 빛나는 날",
        "luckyClub": "아이언",
        "luckyBall": "스릭슨 Z-STAR",
        "luckyHole": "4번홀",
        "luckyTPO": "하얀색 상의, 검은색 하의",
        "roundFortune": "전반적으로 안정적인 기류입니다.",
        "bettingFortune": "멘탈이 흔들리지 않는 하루.",
        "strategyFortune": "아이언 샷이 특히 좋습니다.",
        "scoreFortune": "체력 관리에 신경 쓰세요.",
        "courseFortune": "동반자 운이 좋습니다.",
        "quote": "오늘도 즐거운 라운드 되세요."
    }"#
    .as_bytes()
    .to_vec()
}

// 构建测试用的存储
pub fn new_test_ext() -> sp_io::TestExternalities {
    let t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        MockFortuneProvider::clear();
    });
    ext
}
