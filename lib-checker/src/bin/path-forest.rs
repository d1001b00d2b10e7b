use path_forest::PathForest;
use proconio::input;

// 頂点番号は直前のクエリの答えで難読化されている。復号を間違えると
// 以降の操作がすべてずれるので、答えを1つ出すごとに`prev`を更新する。
fn main() {
    input! {
        n: usize,
        q: usize,
    }

    let mut forest = PathForest::<i64>::new(n);
    let mut prev = 0i64;
    for _ in 0..q {
        input! {
            t: u8,
            i: i64,
            j: i64,
        }
        let u = (prev + i + n as i64).rem_euclid(n as i64) as usize;
        let v = (prev + j + n as i64).rem_euclid(n as i64) as usize;
        match t {
            1 => {
                input! {
                    w: i64,
                }
                forest.add_edge(u, v, w).unwrap();
            }
            2 => {
                let ans = forest.path_sum(u, v).unwrap_or(-1);
                println!("{ans}");
                prev = ans.rem_euclid(n as i64);
            }
            _ => unreachable!(),
        }
    }
}
