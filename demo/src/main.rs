//! Drives both containers through the same walk: build two sequences from
//! half-open integer ranges, count the elements they share, append a
//! sentinel, splice the first sequence (reversed twice) onto a copy of the
//! second, then cut everything from the first sentinel onward.

use anyhow::{bail, Context, Result};
use containers::{DynamicArray, LinkedList};

const SENTINEL: i32 = -100;

fn parse_args() -> Result<[i32; 4]> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 4 {
        bail!("usage: demo <first1> <last1> <first2> <last2>");
    }
    let mut bounds = [0i32; 4];
    for (slot, raw) in bounds.iter_mut().zip(&args) {
        *slot = raw
            .parse()
            .with_context(|| format!("not an integer: {raw}"))?;
    }
    Ok(bounds)
}

fn construct_list(first: i32, last: i32) -> LinkedList<i32> {
    let mut list = LinkedList::new();
    for i in first..last {
        list.push_back(i);
    }
    list
}

fn construct_array(first: i32, last: i32) -> DynamicArray<i32> {
    let mut array = DynamicArray::with_capacity((last - first + 1).max(1) as u32);
    for i in first..last {
        array.push_back(i);
    }
    array
}

fn equal_count<C>(xs: &C, ys: &C) -> u32
where
    for<'a> &'a C: IntoIterator<Item = &'a i32>,
{
    let mut count = 0;
    for x in xs {
        for y in ys {
            if x == y {
                count += 1;
                break;
            }
        }
    }
    count
}

fn run_lists([a, b, c, d]: [i32; 4]) -> Result<()> {
    let mut l1 = construct_list(a, b);
    let mut l2 = construct_list(c, d);
    println!("l1: {l1}");
    println!("l2: {l2}");
    println!("equal elements in l1 and l2: {}", equal_count(&l1, &l2));

    l1.push_back(SENTINEL);
    l2.push_back(SENTINEL);
    println!("l1: {l1}");
    println!("l2: {l2}");

    let mut l = l2.clone();
    println!("l: {l}");

    for value in l1.iter().rev() {
        let front = l.begin();
        l.insert(front, *value)?;
    }
    println!("l: {l}");

    let cut = l
        .entries()
        .find(|(_, value)| **value == SENTINEL)
        .map(|(pos, _)| pos)
        .unwrap_or_else(|| l.end());
    l.erase_range(cut, l.end())
        .context("cutting the sentinel tail")?;
    println!("l: {l}");

    Ok(())
}

fn run_arrays([a, b, c, d]: [i32; 4]) -> Result<()> {
    let mut v1 = construct_array(a, b);
    let mut v2 = construct_array(c, d);
    println!("v1: {v1}");
    println!("v2: {v2}");
    println!("equal elements in v1 and v2: {}", equal_count(&v1, &v2));

    v1.push_back(SENTINEL);
    v2.push_back(SENTINEL);
    println!("v1: {v1}");
    println!("v2: {v2}");

    let mut v = v2.clone();
    println!("v: {v}");

    for value in v1.iter().rev() {
        let front = v.begin();
        v.insert(front, *value)?;
    }
    println!("v: {v}");

    let cut = v
        .positions()
        .find(|p| matches!(v.get(p.index()), Ok(&value) if value == SENTINEL))
        .unwrap_or_else(|| v.end());
    v.erase_range(cut, v.end())
        .context("cutting the sentinel tail")?;

    v.erase(v.position_of(2).context("array has no third element")?)
        .context("erasing the third element")?;
    println!("v: {v}");

    Ok(())
}

fn main() -> Result<()> {
    let bounds = parse_args()?;
    run_lists(bounds)?;
    run_arrays(bounds)?;
    Ok(())
}
